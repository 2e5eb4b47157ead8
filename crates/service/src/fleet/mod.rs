//! Filter/query/aggregation layer of the fleet dashboard.
//!
//! - `service`: validates filter input and orchestrates reads.
//! - `repository`: per-call store access (`FleetRepository`, SeaORM impl).
//! - `queries`: the parameter-bound SeaORM statements.
//! - `records` / `stats`: result sets and caller-side review statistics.

pub mod filters;
pub mod queries;
pub mod records;
pub mod repository;
pub mod service;
pub mod stats;

pub use records::{CityBreakdown, FleetAnalytics, OemRecord, ReviewRecord, TypeBreakdown, VehicleRecord};
pub use repository::{FleetRepository, SeaOrmFleetRepository};
pub use service::FleetQueryService;
pub use stats::ReviewSummary;

#[cfg(test)]
mod tests;
