use serde::{Deserialize, Serialize};

/// Order record as stored by a repository
///
/// The list-orders use case treats this as opaque and hands it back
/// untouched. Missing numeric fields default to zero so sparse records
/// (`{"id": "1"}`) are still accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub final_price: f64,
}

impl Order {
    /// Creates an order whose final price is `price + tax`
    pub fn new(id: impl Into<String>, price: f64, tax: f64) -> Self {
        Self {
            id: id.into(),
            price,
            tax,
            final_price: price + tax,
        }
    }

    /// Creates an order carrying only an identifier
    pub fn with_id(id: impl Into<String>) -> Self {
        Self::new(id, 0.0, 0.0)
    }
}
