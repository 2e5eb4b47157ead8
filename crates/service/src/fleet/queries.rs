//! SeaORM queries behind the fleet repository.
//!
//! Every filter value goes through the query builder and is bound as a
//! parameter. Functions take an open handle and leave its lifetime to the caller.

use sea_orm::sea_query::{Asterisk, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use models::{oem, review, vehicle};

use super::records::{CityBreakdown, FleetAnalytics, OemRecord, ReviewRecord, TypeBreakdown, VehicleRecord};

/// Distinct OEM cities, ascending.
pub async fn distinct_cities(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    oem::Entity::find()
        .select_only()
        .column(oem::Column::City)
        .distinct()
        .filter(oem::Column::City.is_not_null())
        .order_by_asc(oem::Column::City)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// Distinct vehicle types, ascending.
pub async fn distinct_vehicle_types(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    vehicle::Entity::find()
        .select_only()
        .column(vehicle::Column::VehicleType)
        .distinct()
        .filter(vehicle::Column::VehicleType.is_not_null())
        .order_by_asc(vehicle::Column::VehicleType)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// Distinct vehicle models, ascending.
pub async fn distinct_models(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    vehicle::Entity::find()
        .select_only()
        .column(vehicle::Column::Model)
        .distinct()
        .filter(vehicle::Column::Model.is_not_null())
        .order_by_asc(vehicle::Column::Model)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// OEMs located in exactly `city`, in storage order.
pub async fn oems_in_city(db: &DatabaseConnection, city: &str) -> Result<Vec<OemRecord>, DbErr> {
    oem::Entity::find()
        .select_only()
        .columns([
            oem::Column::Name,
            oem::Column::Contact,
            oem::Column::City,
            oem::Column::Address,
            oem::Column::Phone,
        ])
        .filter(oem::Column::City.eq(city))
        .order_by_asc(oem::Column::RowId)
        .into_model::<OemRecord>()
        .all(db)
        .await
}

fn vehicle_columns() -> sea_orm::Select<vehicle::Entity> {
    vehicle::Entity::find()
        .select_only()
        .column(vehicle::Column::Model)
        .column(vehicle::Column::Dealer)
        .column_as(vehicle::Column::VehicleType, "vehicle_type")
        .column(vehicle::Column::PriceLakhs)
}

/// Listings of `vehicle_type` priced at or below `max_price_lakhs`.
pub async fn vehicles_within_budget(
    db: &DatabaseConnection,
    vehicle_type: &str,
    max_price_lakhs: f64,
) -> Result<Vec<VehicleRecord>, DbErr> {
    vehicle_columns()
        .filter(vehicle::Column::VehicleType.eq(vehicle_type))
        .filter(vehicle::Column::PriceLakhs.lte(max_price_lakhs))
        .order_by_asc(vehicle::Column::PriceLakhs)
        .order_by_asc(vehicle::Column::RowId)
        .into_model::<VehicleRecord>()
        .all(db)
        .await
}

/// Every listing whose model is in `models`; one row per dealer listing.
pub async fn vehicles_for_models(db: &DatabaseConnection, models: &[String]) -> Result<Vec<VehicleRecord>, DbErr> {
    vehicle_columns()
        .filter(vehicle::Column::Model.is_in(models.iter().map(String::as_str)))
        .order_by_asc(vehicle::Column::Model)
        .order_by_asc(vehicle::Column::RowId)
        .into_model::<VehicleRecord>()
        .all(db)
        .await
}

/// Ratings and comments for exactly `model`, in storage order.
pub async fn reviews_for_model(db: &DatabaseConnection, model: &str) -> Result<Vec<ReviewRecord>, DbErr> {
    review::Entity::find()
        .select_only()
        .column(review::Column::Rating)
        .column(review::Column::Comment)
        .filter(review::Column::Model.eq(model))
        .order_by_asc(review::Column::RowId)
        .into_model::<ReviewRecord>()
        .all(db)
        .await
}

/// Vehicle count and mean price per type, plus OEM count per city.
pub async fn fleet_analytics(db: &DatabaseConnection) -> Result<FleetAnalytics, DbErr> {
    let vehicles_by_type = vehicle::Entity::find()
        .select_only()
        .column_as(vehicle::Column::VehicleType, "vehicle_type")
        .column_as(SimpleExpr::from(Func::count(Expr::col(Asterisk))), "vehicle_count")
        .column_as(SimpleExpr::from(Func::avg(Expr::col(vehicle::Column::PriceLakhs))), "avg_price_lakhs")
        .group_by(vehicle::Column::VehicleType)
        .order_by_asc(vehicle::Column::VehicleType)
        .into_model::<TypeBreakdown>()
        .all(db)
        .await?;

    let oems_by_city = oem::Entity::find()
        .select_only()
        .column(oem::Column::City)
        .column_as(SimpleExpr::from(Func::count(Expr::col(Asterisk))), "oem_count")
        .group_by(oem::Column::City)
        .order_by_asc(oem::Column::City)
        .into_model::<CityBreakdown>()
        .all(db)
        .await?;

    Ok(FleetAnalytics { vehicles_by_type, oems_by_city })
}
