use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

use models::db::{connect_read_only, StoreConfig};

use crate::errors::ServiceError;
use super::queries;
use super::records::{FleetAnalytics, OemRecord, ReviewRecord, VehicleRecord};

/// Read access to the fleet dataset. Inputs arrive already validated.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    async fn distinct_cities(&self) -> Result<Vec<String>, ServiceError>;
    async fn distinct_vehicle_types(&self) -> Result<Vec<String>, ServiceError>;
    async fn distinct_models(&self) -> Result<Vec<String>, ServiceError>;
    async fn oems_in_city(&self, city: &str) -> Result<Vec<OemRecord>, ServiceError>;
    async fn vehicles_within_budget(&self, vehicle_type: &str, max_price_lakhs: f64) -> Result<Vec<VehicleRecord>, ServiceError>;
    async fn reviews_for_model(&self, model: &str) -> Result<Vec<ReviewRecord>, ServiceError>;
    async fn vehicles_for_models(&self, models: &[String]) -> Result<Vec<VehicleRecord>, ServiceError>;
    async fn fleet_analytics(&self) -> Result<FleetAnalytics, ServiceError>;
}

/// SeaORM-backed repository over a SQLite file.
///
/// Holds only the store location. Each call opens its own read-only handle and
/// closes it before returning, whether the read succeeded or not.
pub struct SeaOrmFleetRepository {
    pub store: StoreConfig,
}

impl SeaOrmFleetRepository {
    pub fn new(store: StoreConfig) -> Self { Self { store } }

    async fn acquire(&self, operation: &'static str) -> Result<DatabaseConnection, ServiceError> {
        connect_read_only(&self.store)
            .await
            .map_err(|e| ServiceError::from_db(operation, &e))
    }

    /// Close the handle and turn the read outcome into a service result.
    async fn finish<T>(&self, operation: &'static str, db: DatabaseConnection, res: Result<T, DbErr>) -> Result<T, ServiceError> {
        if let Err(e) = db.close().await {
            debug!(operation, error = %e, "store_handle_close_failed");
        }
        res.map_err(|e| ServiceError::from_db(operation, &e))
    }
}

#[async_trait]
impl FleetRepository for SeaOrmFleetRepository {
    async fn distinct_cities(&self) -> Result<Vec<String>, ServiceError> {
        let db = self.acquire("list_cities").await?;
        let res = queries::distinct_cities(&db).await;
        self.finish("list_cities", db, res).await
    }

    async fn distinct_vehicle_types(&self) -> Result<Vec<String>, ServiceError> {
        let db = self.acquire("list_vehicle_types").await?;
        let res = queries::distinct_vehicle_types(&db).await;
        self.finish("list_vehicle_types", db, res).await
    }

    async fn distinct_models(&self) -> Result<Vec<String>, ServiceError> {
        let db = self.acquire("list_models").await?;
        let res = queries::distinct_models(&db).await;
        self.finish("list_models", db, res).await
    }

    async fn oems_in_city(&self, city: &str) -> Result<Vec<OemRecord>, ServiceError> {
        let db = self.acquire("find_oems_by_city").await?;
        let res = queries::oems_in_city(&db, city).await;
        self.finish("find_oems_by_city", db, res).await
    }

    async fn vehicles_within_budget(&self, vehicle_type: &str, max_price_lakhs: f64) -> Result<Vec<VehicleRecord>, ServiceError> {
        let db = self.acquire("find_vehicles").await?;
        let res = queries::vehicles_within_budget(&db, vehicle_type, max_price_lakhs).await;
        self.finish("find_vehicles", db, res).await
    }

    async fn reviews_for_model(&self, model: &str) -> Result<Vec<ReviewRecord>, ServiceError> {
        let db = self.acquire("get_reviews").await?;
        let res = queries::reviews_for_model(&db, model).await;
        self.finish("get_reviews", db, res).await
    }

    async fn vehicles_for_models(&self, models: &[String]) -> Result<Vec<VehicleRecord>, ServiceError> {
        let db = self.acquire("compare_models").await?;
        let res = queries::vehicles_for_models(&db, models).await;
        self.finish("compare_models", db, res).await
    }

    async fn fleet_analytics(&self) -> Result<FleetAnalytics, ServiceError> {
        let db = self.acquire("fleet_analytics").await?;
        let res = queries::fleet_analytics(&db).await;
        self.finish("fleet_analytics", db, res).await
    }
}
