//! Validation of user-supplied filter values.
//!
//! A filter that cannot match anything is rejected here so the service can
//! answer with an empty result without touching the store.

use crate::errors::ServiceError;

/// Exact-match text filter (city, vehicle type, model).
pub fn exact_text(value: &str) -> Result<&str, ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::InvalidFilter("empty selection"));
    }
    Ok(value)
}

/// Budget ceiling in lakhs. The ceiling itself is included by the query.
pub fn budget_ceiling(max_price_lakhs: f64) -> Result<f64, ServiceError> {
    if max_price_lakhs.is_nan() {
        return Err(ServiceError::InvalidFilter("budget is not a number"));
    }
    if max_price_lakhs < 0.0 {
        return Err(ServiceError::InvalidFilter("budget is negative"));
    }
    Ok(max_price_lakhs)
}

/// De-duplicated, order-preserving set of models to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection(Vec<String>);

impl ModelSelection {
    pub fn new<S: AsRef<str>>(models: &[S]) -> Result<Self, ServiceError> {
        let mut picked: Vec<String> = Vec::with_capacity(models.len());
        for m in models {
            let m = m.as_ref();
            if !picked.iter().any(|p| p == m) {
                picked.push(m.to_string());
            }
        }
        if picked.is_empty() {
            return Err(ServiceError::InvalidFilter("no models selected"));
        }
        Ok(Self(picked))
    }

    pub fn as_slice(&self) -> &[String] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}
