use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

/// Default store file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "fleet_demo.db";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path. Empty means "take it from FLEET_DB_PATH".
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: String::new(), connect_timeout_secs: default_connect_timeout(), sqlx_logging: false }
    }
}

/// Bounds of the dashboard's filter widgets.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_budget_min")]
    pub budget_min: f64,
    #[serde(default = "default_budget_max")]
    pub budget_max: f64,
    #[serde(default = "default_budget_default")]
    pub budget_default: f64,
    #[serde(default = "default_compare_min_models")]
    pub compare_min_models: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            budget_min: default_budget_min(),
            budget_max: default_budget_max(),
            budget_default: default_budget_default(),
            compare_min_models: default_compare_min_models(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_connect_timeout() -> u64 { 30 }
fn default_budget_min() -> f64 { 10.0 }
fn default_budget_max() -> f64 { 60.0 }
fn default_budget_default() -> f64 { 25.0 }
fn default_compare_min_models() -> usize { 2 }

/// Config file location: `CONFIG_PATH`, else `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like [`AppConfig::load_and_validate`], but a missing config file falls
    /// back to defaults. A file that exists and fails to parse is still an error.
    pub fn load_or_default() -> Result<Self> {
        if std::path::Path::new(&config_path()).exists() {
            return Self::load_and_validate();
        }
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 数据库路径：TOML 未提供时从环境变量或默认值填充
        self.database.normalize_from_env();
        self.database.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.path.trim().is_empty() {
            self.path = std::env::var("FLEET_DB_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("database.path is empty; set it in config.toml or FLEET_DB_PATH"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(anyhow!("database.connect_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.budget_min, self.budget_max, self.budget_default];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(anyhow!("dashboard budget bounds must be finite"));
        }
        if self.budget_min < 0.0 || self.budget_min > self.budget_max {
            return Err(anyhow!("dashboard.budget_min must be within 0..=budget_max"));
        }
        if self.budget_default < self.budget_min || self.budget_default > self.budget_max {
            return Err(anyhow!("dashboard.budget_default must lie between budget_min and budget_max"));
        }
        if self.compare_min_models == 0 {
            return Err(anyhow!("dashboard.compare_min_models must be >= 1"));
        }
        Ok(())
    }

    /// Budget for a vehicle search. `None` picks the default; a value outside
    /// `budget_min..=budget_max` is rejected rather than moved into range.
    pub fn resolve_budget(&self, requested: Option<f64>) -> Result<f64> {
        let Some(b) = requested else { return Ok(self.budget_default) };
        if b.is_nan() || b < self.budget_min || b > self.budget_max {
            return Err(anyhow!(
                "budget must be between {} and {} lakhs, got {}",
                self.budget_min,
                self.budget_max,
                b
            ));
        }
        Ok(b)
    }
}
