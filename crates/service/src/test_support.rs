use std::sync::Arc;

use migration::MigratorTrait;
use models::db::{connect_read_write, StoreConfig};
use sea_orm::ConnectionTrait;
use tempfile::TempDir;

use crate::fleet::{FleetQueryService, SeaOrmFleetRepository};

/// A store file inside its own temp dir; dropped together with the dir.
pub struct TestStore {
    _dir: TempDir,
    pub config: StoreConfig,
}

impl TestStore {
    fn in_tempdir() -> Result<Self, anyhow::Error> {
        Self::in_subdir(".")
    }

    fn in_subdir(name: &str) -> Result<Self, anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let parent = dir.path().join(name);
        std::fs::create_dir_all(&parent)?;
        let config = StoreConfig::new(parent.join("fleet_demo.db"));
        Ok(Self { _dir: dir, config })
    }

    pub fn service(&self) -> FleetQueryService<SeaOrmFleetRepository> {
        FleetQueryService::new(Arc::new(SeaOrmFleetRepository::new(self.config.clone())))
    }
}

/// Migrated store holding the demo dataset.
pub async fn seeded_store() -> Result<TestStore, anyhow::Error> {
    seeded_store_in(".").await
}

/// Like [`seeded_store`], with the file placed under directory `name`.
pub async fn seeded_store_in(name: &str) -> Result<TestStore, anyhow::Error> {
    let store = TestStore::in_subdir(name)?;
    let db = connect_read_write(&store.config).await?;
    migration::Migrator::up(&db, None).await?;
    models::fixtures::seed_demo(&db).await?;
    db.close().await?;
    Ok(store)
}

/// Migrated store with no rows.
pub async fn empty_store() -> Result<TestStore, anyhow::Error> {
    let store = TestStore::in_tempdir()?;
    let db = connect_read_write(&store.config).await?;
    migration::Migrator::up(&db, None).await?;
    db.close().await?;
    Ok(store)
}

/// A valid SQLite file that lacks the fleet tables.
pub async fn store_without_tables() -> Result<TestStore, anyhow::Error> {
    let store = TestStore::in_tempdir()?;
    let db = connect_read_write(&store.config).await?;
    db.execute_unprepared("CREATE TABLE unrelated (x INTEGER)").await?;
    db.close().await?;
    Ok(store)
}

/// Points at a file that does not exist.
pub fn missing_store() -> Result<TestStore, anyhow::Error> {
    TestStore::in_tempdir()
}

/// Run raw SQL against a test store, e.g. to add rows a test needs.
pub async fn execute(store: &TestStore, sql: &str) -> Result<(), anyhow::Error> {
    let db = connect_read_write(&store.config).await?;
    db.execute_unprepared(sql).await?;
    db.close().await?;
    Ok(())
}
