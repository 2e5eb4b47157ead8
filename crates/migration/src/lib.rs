//! Migrator creating the fleet tables. Indexes are applied last.
//!
//! The dashboard reads an existing store and never migrates it; this crate
//! backs the demo seeding tool and the test fixtures.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_oems;
mod m20240101_000002_create_vehicles;
mod m20240101_000003_create_reviews;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_oems::Migration),
            Box::new(m20240101_000002_create_vehicles::Migration),
            Box::new(m20240101_000003_create_reviews::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
