use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use models::fixtures::{DEMO_OEMS, DEMO_REVIEWS, DEMO_VEHICLES};

use super::*;
use crate::errors::ServiceError;
use crate::test_support::{empty_store, execute, missing_store, seeded_store, seeded_store_in, store_without_tables};

fn approx_eq(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

/// Repository that only counts how often the store would have been hit.
#[derive(Default)]
struct CountingRepository {
    calls: AtomicUsize,
}

impl CountingRepository {
    fn hit(&self) { self.calls.fetch_add(1, Ordering::SeqCst); }
    fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

#[async_trait]
impl FleetRepository for CountingRepository {
    async fn distinct_cities(&self) -> Result<Vec<String>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn distinct_vehicle_types(&self) -> Result<Vec<String>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn distinct_models(&self) -> Result<Vec<String>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn oems_in_city(&self, _city: &str) -> Result<Vec<OemRecord>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn vehicles_within_budget(&self, _vehicle_type: &str, _max: f64) -> Result<Vec<VehicleRecord>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn reviews_for_model(&self, _model: &str) -> Result<Vec<ReviewRecord>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn vehicles_for_models(&self, _models: &[String]) -> Result<Vec<VehicleRecord>, ServiceError> { self.hit(); Ok(vec![]) }
    async fn fleet_analytics(&self) -> Result<FleetAnalytics, ServiceError> { self.hit(); Ok(FleetAnalytics::default()) }
}

#[tokio::test]
async fn option_lists_are_sorted_and_unique() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();

    let cities = svc.list_cities().await?;
    assert_eq!(cities, vec!["Bengaluru", "Chennai", "Delhi", "Mumbai", "Pune"]);

    let types = svc.list_vehicle_types().await?;
    assert_eq!(types, vec!["Heavy Truck", "Intermediate Truck", "Light Truck", "Mini Truck"]);

    let models = svc.list_models().await?;
    let mut expected: Vec<&str> = DEMO_VEHICLES.iter().map(|v| v.model).collect();
    expected.sort_unstable();
    expected.dedup();
    assert_eq!(models, expected);

    // same data, same answer
    assert_eq!(svc.list_cities().await?, cities);
    assert_eq!(svc.list_vehicle_types().await?, types);
    assert_eq!(svc.list_models().await?, models);
    Ok(())
}

#[tokio::test]
async fn oems_match_city_exactly() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();

    let chennai = svc.find_oems_by_city("Chennai").await?;
    let names: Vec<&str> = chennai.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Ashok Leyland", "BharatBenz"]);
    assert!(chennai.iter().all(|o| o.city == "Chennai"));
    assert_eq!(chennai[0].contact.as_deref(), Some("Priya Nair"));

    assert!(svc.find_oems_by_city("chennai").await?.is_empty());
    assert!(svc.find_oems_by_city("Chen").await?.is_empty());
    assert!(svc.find_oems_by_city("Atlantis").await?.is_empty());
    assert!(svc.find_oems_by_city("").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn filter_values_are_bound_not_interpolated() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    execute(&store, "INSERT INTO oems (name, city) VALUES ('Riverside Motors', 'O''Fallon')").await?;
    let svc = store.service();

    assert!(svc.find_oems_by_city("Pune' OR '1'='1").await?.is_empty());
    let quoted = svc.find_oems_by_city("O'Fallon").await?;
    assert_eq!(quoted.len(), 1);
    assert_eq!(quoted[0].name, "Riverside Motors");
    assert_eq!(quoted[0].phone, None);

    assert!(svc.get_reviews("x' OR 1=1 --").await?.is_empty());
    assert!(svc.compare_models(&["') OR ('1'='1"]).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn budget_ceiling_is_inclusive() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();

    let rows = svc.find_vehicles("Intermediate Truck", 26.5).await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|v| v.model == "Ashok Leyland Boss"));
    assert!(rows.iter().any(|v| approx_eq(v.price_lakhs, 26.5)));

    assert_eq!(svc.find_vehicles("Intermediate Truck", 26.49).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn vehicle_filter_returns_exactly_the_matching_listings() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();

    let types = ["Mini Truck", "Light Truck", "Intermediate Truck", "Heavy Truck", "Bus"];
    let budgets = [0.0, 4.9, 5.5, 14.0, 25.0, 30.0, 45.5, 48.0, 100.0];
    for vehicle_type in types {
        for budget in budgets {
            let rows = svc.find_vehicles(vehicle_type, budget).await?;
            assert!(rows.iter().all(|v| v.vehicle_type == vehicle_type && v.price_lakhs <= budget));
            let expected = DEMO_VEHICLES
                .iter()
                .filter(|v| v.vehicle_type == vehicle_type && v.price_lakhs <= budget)
                .count();
            assert_eq!(rows.len(), expected, "type={vehicle_type} budget={budget}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn malformed_budget_yields_empty_result() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();
    assert!(svc.find_vehicles("Mini Truck", f64::NAN).await?.is_empty());
    assert!(svc.find_vehicles("Mini Truck", -5.0).await?.is_empty());
    assert!(svc.find_vehicles("", 50.0).await?.is_empty());
    assert_eq!(svc.find_vehicles("Mini Truck", f64::INFINITY).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn reviews_and_caller_average() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();

    let reviews = svc.get_reviews("Tata Ace Gold").await?;
    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![4, 5, 3]);
    let summary = ReviewSummary::from_reviews(&reviews);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.average_rating, Some(4.0));

    let none = svc.get_reviews("NoSuchModel").await?;
    assert!(none.is_empty());
    assert_eq!(ReviewSummary::from_reviews(&none).average_rating, None);

    // listed, never reviewed
    assert!(svc.get_reviews("Mahindra Jeeto").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn compare_returns_one_row_per_listing() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let svc = store.service();

    let rows = svc.compare_models(&["Tata Ace Gold", "Eicher Pro 2049"]).await?;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|v| v.model == "Tata Ace Gold").count(), 2);
    assert_eq!(rows.iter().filter(|v| v.model == "Eicher Pro 2049").count(), 1);

    let repeated = svc.compare_models(&["Tata Ace Gold".to_string(), "Tata Ace Gold".to_string()]).await?;
    assert_eq!(repeated.len(), 2);

    let with_unknown = svc.compare_models(&["Eicher Pro 2049", "Ghost Model"]).await?;
    assert_eq!(with_unknown.len(), 1);
    Ok(())
}

#[tokio::test]
async fn empty_comparison_never_reaches_the_store() -> Result<(), anyhow::Error> {
    let repo = Arc::new(CountingRepository::default());
    let svc = FleetQueryService::new(Arc::clone(&repo));

    let none: [&str; 0] = [];
    assert!(svc.compare_models(&none).await?.is_empty());
    assert!(svc.find_oems_by_city("").await?.is_empty());
    assert!(svc.find_vehicles("Mini Truck", f64::NAN).await?.is_empty());
    assert_eq!(repo.calls(), 0);

    svc.compare_models(&["Tata Ace Gold"]).await?;
    assert_eq!(repo.calls(), 1);

    // a missing store is not an error when nothing needs reading
    let missing = missing_store()?;
    assert!(missing.service().compare_models(&none).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn analytics_groups_cover_every_row() -> Result<(), anyhow::Error> {
    let store = seeded_store().await?;
    let analytics = store.service().fleet_analytics().await?;

    assert_eq!(analytics.total_vehicles(), DEMO_VEHICLES.len() as i64);
    assert_eq!(analytics.total_oems(), DEMO_OEMS.len() as i64);
    assert!(analytics.vehicles_by_type.iter().all(|t| t.vehicle_count > 0));
    assert!(analytics.oems_by_city.iter().all(|c| c.oem_count > 0));

    let mini = analytics
        .vehicles_by_type
        .iter()
        .find(|t| t.vehicle_type == "Mini Truck")
        .expect("mini truck group");
    assert_eq!(mini.vehicle_count, 3);
    assert!(approx_eq(mini.avg_price_lakhs, (5.5 + 5.8 + 4.9) / 3.0));

    let heavy = analytics.vehicles_by_type.iter().find(|t| t.vehicle_type == "Heavy Truck").expect("heavy group");
    assert!(approx_eq(heavy.avg_price_lakhs, 46.75));

    let cities: Vec<(&str, i64)> = analytics.oems_by_city.iter().map(|c| (c.city.as_str(), c.oem_count)).collect();
    assert_eq!(cities, vec![("Bengaluru", 1), ("Chennai", 2), ("Delhi", 1), ("Mumbai", 1), ("Pune", 2)]);
    Ok(())
}

#[tokio::test]
async fn store_path_with_url_metacharacters_is_readable() -> Result<(), anyhow::Error> {
    for name in ["data%20v1", "q?x"] {
        let store = seeded_store_in(name).await?;
        let svc = store.service();
        assert_eq!(svc.list_cities().await?.len(), 5, "cities under {name}");
        assert_eq!(svc.get_reviews("Tata Ace Gold").await?.len(), 3);
    }
    Ok(())
}

#[tokio::test]
async fn empty_store_is_not_an_error() -> Result<(), anyhow::Error> {
    let store = empty_store().await?;
    let svc = store.service();

    assert!(svc.list_cities().await?.is_empty());
    assert!(svc.list_vehicle_types().await?.is_empty());
    assert!(svc.list_models().await?.is_empty());
    assert!(svc.find_oems_by_city("Pune").await?.is_empty());
    assert!(svc.find_vehicles("Mini Truck", 50.0).await?.is_empty());
    assert!(svc.get_reviews("Tata Ace Gold").await?.is_empty());
    assert!(svc.compare_models(&["Tata Ace Gold"]).await?.is_empty());
    assert_eq!(svc.fleet_analytics().await?, FleetAnalytics::default());
    Ok(())
}

#[tokio::test]
async fn missing_store_is_storage_unavailable() -> Result<(), anyhow::Error> {
    let store = missing_store()?;
    let svc = store.service();

    let err = svc.list_cities().await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageUnavailable { operation: "list_cities" }));

    let err = svc.find_oems_by_city("Secret City").await.unwrap_err();
    assert!(matches!(err, ServiceError::StorageUnavailable { .. }));
    assert!(!err.to_string().contains("Secret City"));

    assert!(matches!(svc.fleet_analytics().await, Err(ServiceError::StorageUnavailable { .. })));
    assert!(matches!(svc.compare_models(&["Tata Ace Gold"]).await, Err(ServiceError::StorageUnavailable { .. })));

    // read-only access never creates the file
    assert!(!store.config.path().exists());
    Ok(())
}

#[tokio::test]
async fn store_without_tables_is_schema_mismatch() -> Result<(), anyhow::Error> {
    let store = store_without_tables().await?;
    let svc = store.service();

    let err = svc.list_models().await.unwrap_err();
    assert!(matches!(err, ServiceError::SchemaMismatch { operation: "list_models" }));

    let err = svc.get_reviews("Tata Ace Gold").await.unwrap_err();
    assert!(matches!(err, ServiceError::SchemaMismatch { .. }));
    assert!(!err.to_string().contains("Tata Ace Gold"));

    assert!(matches!(svc.fleet_analytics().await, Err(ServiceError::SchemaMismatch { .. })));
    Ok(())
}

#[test]
fn demo_reviews_reference_listed_models() {
    assert!(DEMO_REVIEWS.iter().all(|r| DEMO_VEHICLES.iter().any(|v| v.model == r.model)));
}
