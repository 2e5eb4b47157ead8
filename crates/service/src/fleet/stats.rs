use serde::Serialize;

use super::records::ReviewRecord;

/// Caller-side summary of a model's reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub count: usize,
    /// Arithmetic mean of the ratings; `None` when there are no reviews.
    pub average_rating: Option<f64>,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[ReviewRecord]) -> Self {
        let count = reviews.len();
        let average_rating = if count == 0 {
            None
        } else {
            let total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
            Some(total as f64 / count as f64)
        };
        Self { count, average_rating }
    }
}
