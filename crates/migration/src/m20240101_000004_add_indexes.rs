use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // OEMs: lookup by city
        manager
            .create_index(
                Index::create()
                    .name("idx_oems_city")
                    .table(Oems::Table)
                    .col(Oems::City)
                    .to_owned(),
            )
            .await?;

        // Vehicles: type + price for the budget filter
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_type_price")
                    .table(Vehicles::Table)
                    .col(Vehicles::Type)
                    .col(Vehicles::PriceLakhs)
                    .to_owned(),
            )
            .await?;

        // Vehicles: model comparison
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_model")
                    .table(Vehicles::Table)
                    .col(Vehicles::Model)
                    .to_owned(),
            )
            .await?;

        // Reviews: lookup by model
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_model")
                    .table(Reviews::Table)
                    .col(Reviews::Model)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_oems_city").table(Oems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vehicles_type_price").table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vehicles_model").table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_model").table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Oems { Table, City }

#[derive(DeriveIden)]
enum Vehicles { Table, Type, Model, PriceLakhs }

#[derive(DeriveIden)]
enum Reviews { Table, Model }
