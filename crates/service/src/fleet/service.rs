use std::sync::Arc;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use super::filters::{self, ModelSelection};
use super::records::{FleetAnalytics, OemRecord, ReviewRecord, VehicleRecord};
use super::repository::FleetRepository;

/// Query/aggregation service behind the fleet dashboard.
///
/// Stateless: every call is an independent read through the repository. Filter
/// values that cannot match anything short-circuit to an empty result before
/// the store is touched; an empty result is never an error.
pub struct FleetQueryService<R: FleetRepository> {
    repo: Arc<R>,
}

impl<R: FleetRepository> FleetQueryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_cities(&self) -> Result<Vec<String>, ServiceError> {
        let cities = self.repo.distinct_cities().await?;
        debug!(rows = cities.len(), "cities_listed");
        Ok(cities)
    }

    #[instrument(skip(self))]
    pub async fn list_vehicle_types(&self) -> Result<Vec<String>, ServiceError> {
        let types = self.repo.distinct_vehicle_types().await?;
        debug!(rows = types.len(), "vehicle_types_listed");
        Ok(types)
    }

    /// Models are sorted ascending, like the other option lists.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> Result<Vec<String>, ServiceError> {
        let models = self.repo.distinct_models().await?;
        debug!(rows = models.len(), "models_listed");
        Ok(models)
    }

    /// Exact, case-sensitive match on city.
    #[instrument(skip_all)]
    pub async fn find_oems_by_city(&self, city: &str) -> Result<Vec<OemRecord>, ServiceError> {
        let city = match filters::exact_text(city) {
            Ok(c) => c,
            Err(e) => return Ok(short_circuit("find_oems_by_city", e)),
        };
        let oems = self.repo.oems_in_city(city).await?;
        debug!(rows = oems.len(), "oems_found");
        Ok(oems)
    }

    /// Listings of `vehicle_type` with `price_lakhs <= max_price_lakhs`.
    #[instrument(skip_all, fields(max_price_lakhs = max_price_lakhs))]
    pub async fn find_vehicles(&self, vehicle_type: &str, max_price_lakhs: f64) -> Result<Vec<VehicleRecord>, ServiceError> {
        let checked = filters::exact_text(vehicle_type).and_then(|t| filters::budget_ceiling(max_price_lakhs).map(|c| (t, c)));
        let (vehicle_type, ceiling) = match checked {
            Ok(v) => v,
            Err(e) => return Ok(short_circuit("find_vehicles", e)),
        };
        let vehicles = self.repo.vehicles_within_budget(vehicle_type, ceiling).await?;
        debug!(rows = vehicles.len(), "vehicles_found");
        Ok(vehicles)
    }

    /// Raw reviews; averaging is left to the caller (see `ReviewSummary`).
    #[instrument(skip_all)]
    pub async fn get_reviews(&self, model: &str) -> Result<Vec<ReviewRecord>, ServiceError> {
        let model = match filters::exact_text(model) {
            Ok(m) => m,
            Err(e) => return Ok(short_circuit("get_reviews", e)),
        };
        let reviews = self.repo.reviews_for_model(model).await?;
        debug!(rows = reviews.len(), "reviews_found");
        Ok(reviews)
    }

    /// All listings of the selected models, one row per dealer listing.
    /// An empty selection returns nothing without querying the store.
    #[instrument(skip_all, fields(selected = models.len()))]
    pub async fn compare_models<S: AsRef<str> + Sync>(&self, models: &[S]) -> Result<Vec<VehicleRecord>, ServiceError> {
        let selection = match ModelSelection::new(models) {
            Ok(s) => s,
            Err(e) => return Ok(short_circuit("compare_models", e)),
        };
        let vehicles = self.repo.vehicles_for_models(selection.as_slice()).await?;
        debug!(rows = vehicles.len(), distinct_models = selection.len(), "models_compared");
        Ok(vehicles)
    }

    #[instrument(skip(self))]
    pub async fn fleet_analytics(&self) -> Result<FleetAnalytics, ServiceError> {
        let analytics = self.repo.fleet_analytics().await?;
        debug!(
            types = analytics.vehicles_by_type.len(),
            cities = analytics.oems_by_city.len(),
            "fleet_analytics_computed"
        );
        Ok(analytics)
    }
}

fn short_circuit<T>(operation: &'static str, reason: ServiceError) -> Vec<T> {
    debug!(operation, reason = %reason, "filter_short_circuit");
    Vec::new()
}
