//! AI order annotation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured estimate produced by the annotation collaborator for a
/// free-text order.
///
/// Attached to an order at creation time when the user opts in. The
/// collaborator never blocks order creation: on any failure the consumer
/// substitutes [`OrderAnalysis::degraded`] instead of propagating an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnalysis {
    /// Short summary of what was ordered.
    pub summary: String,
    /// Estimated total price, in the shop's currency.
    pub estimated_price: Decimal,
    /// One-line nutrition comment on the meal.
    pub nutrition_tip: String,
}

impl OrderAnalysis {
    /// The degraded-but-valid fallback used when the collaborator is
    /// unavailable or returns something unparseable.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            summary: "AI analysis is temporarily unavailable".to_owned(),
            estimated_price: Decimal::ZERO,
            nutrition_tip: "Please try again later".to_owned(),
        }
    }
}
