//! Helpers shared by the dashboard binary and its crates.
pub mod utils;
