//! Service layer answering the fleet dashboard's filter queries.
//! - Reads OEMs, vehicles and reviews through entities in the `models` crate.
//! - Turns filter selections into record sets and fleet-wide aggregates.
//! - Reports storage failures as `ServiceError` without leaking query detail.

pub mod errors;
pub mod fleet;
#[cfg(test)]
pub mod test_support;
