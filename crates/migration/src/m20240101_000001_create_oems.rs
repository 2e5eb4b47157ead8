//! Create `oems` table.
//!
//! Manufacturers and their local contact; grouped by city on the dashboard.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Oems::Table)
                    .if_not_exists()
                    .col(string_len(Oems::Name, 128).not_null())
                    .col(string_len_null(Oems::Contact, 128))
                    .col(string_len(Oems::City, 64).not_null())
                    .col(string_len_null(Oems::Address, 256))
                    .col(string_len_null(Oems::Phone, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Oems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Oems { Table, Name, Contact, City, Address, Phone }
