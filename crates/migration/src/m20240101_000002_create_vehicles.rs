//! Create `vehicles` table.
//!
//! One row per dealer listing; a model may appear under several dealers.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(string_len(Vehicles::Model, 128).not_null())
                    .col(string_len(Vehicles::Dealer, 128).not_null())
                    .col(string_len(Vehicles::Type, 64).not_null())
                    .col(double(Vehicles::PriceLakhs).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicles { Table, Model, Dealer, Type, PriceLakhs }
