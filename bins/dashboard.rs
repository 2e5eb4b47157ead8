use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use configs::{AppConfig, LogFormat};
use dashboard::cli::Cli;

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    // 优先使用 --config 指定的文件，否则 CONFIG_PATH / config.toml，缺失时使用默认值
    match &cli.config {
        Some(path) => {
            let mut cfg = configs::load_from_file(&path.display().to_string())?;
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
        None => AppConfig::load_or_default(),
    }
}

fn init_logging(cfg: &AppConfig) {
    // 日志写入 stderr，stdout 只输出仪表盘内容
    match cfg.logging.format {
        LogFormat::Json => common::utils::logging::init_logging_json(),
        LogFormat::Compact => common::utils::logging::init_logging_default(),
    }
    info!(service = "dashboard", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // 提前加载 .env，使得 RUST_LOG / FLEET_DB_PATH 等环境变量生效
    dotenv().ok();
    let cli = Cli::parse();

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("invalid configuration: {e:#}");
            return std::process::ExitCode::FAILURE;
        }
    };
    init_logging(&cfg);

    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "dashboard", event = "panic", pid, message = %info, "unhandled panic occurred");
    }));

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "dashboard", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "dashboard", event = "start", pid, version, "dashboard starting");

    match rt.block_on(dashboard::run(cli, cfg)) {
        Ok(()) => {
            info!(service = "dashboard", event = "stop", pid, "dashboard finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            // 错误信息不含驱动细节，直接展示给用户
            error!(service = "dashboard", event = "run_failed", error = %e, "dashboard command failed");
            eprintln!("error: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
