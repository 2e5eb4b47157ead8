use std::path::{Path, PathBuf};
use std::time::Duration;

use sea_orm::sqlx::sqlite::SqliteConnectOptions;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Selects the SQLite driver; the file itself is set on the driver options.
const SQLITE_URL_PREFIX: &str = "sqlite:";

/// Location and connection settings of the SQLite store.
///
/// Built from `configs::DatabaseConfig` at startup and handed to whoever needs
/// a connection; nothing in this crate keeps a process-wide store location.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub connect_timeout: Duration,
    pub sqlx_logging: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), connect_timeout: Duration::from_secs(30), sqlx_logging: false }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Connect options for the store file. The path goes to the driver as a
    /// filename rather than through a URL, so `%`, `?` and `#` in it are kept
    /// verbatim. A read-only handle never creates a missing file.
    fn options(&self, read_only: bool) -> ConnectOptions {
        let mut opt = ConnectOptions::new(SQLITE_URL_PREFIX);
        opt.max_connections(1)
            .min_connections(1)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging);
        let path = self.path.clone();
        opt.map_sqlx_sqlite_opts(move |o: SqliteConnectOptions| {
            o.filename(&path).read_only(read_only).create_if_missing(!read_only)
        });
        opt
    }
}

impl From<&configs::DatabaseConfig> for StoreConfig {
    fn from(cfg: &configs::DatabaseConfig) -> Self {
        Self {
            path: PathBuf::from(&cfg.path),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            sqlx_logging: cfg.sqlx_logging,
        }
    }
}

/// Open a read-only handle. Callers own the handle and close it when done.
pub async fn connect_read_only(cfg: &StoreConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(cfg.options(true)).await
}

/// Open a writable handle, creating the file when missing. Only the demo
/// seeding path and tests write.
pub async fn connect_read_write(cfg: &StoreConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(cfg.options(false)).await
}
