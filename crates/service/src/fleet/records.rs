//! Record sets returned to the presentation layer.
//!
//! These are projections, not entities: each one selects exactly the columns
//! the dashboard shows and leaves the storage key behind.

use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct OemRecord {
    pub name: String,
    pub contact: Option<String>,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct VehicleRecord {
    pub model: String,
    pub dealer: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price_lakhs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct ReviewRecord {
    pub rating: i32,
    pub comment: Option<String>,
}

/// Vehicle count and mean price for one vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub vehicle_count: i64,
    pub avg_price_lakhs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct CityBreakdown {
    pub city: String,
    pub oem_count: i64,
}

/// Fleet-wide aggregates. Only groups present in the data are listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetAnalytics {
    pub vehicles_by_type: Vec<TypeBreakdown>,
    pub oems_by_city: Vec<CityBreakdown>,
}

impl FleetAnalytics {
    pub fn total_vehicles(&self) -> i64 {
        self.vehicles_by_type.iter().map(|t| t.vehicle_count).sum()
    }

    pub fn total_oems(&self) -> i64 {
        self.oems_by_city.iter().map(|c| c.oem_count).sum()
    }
}
