//! SeaORM entities for the fleet dataset plus store connection helpers.
pub mod errors;
pub mod db;
pub mod oem;
pub mod vehicle;
pub mod review;
pub mod fixtures;
