//! Order listing read model
//!
//! Denormalized view of one listing: metadata, the orders in repository
//! order, and precomputed totals.

/// Main read model for an order listing
#[derive(Debug, Clone)]
pub struct OrderListReadModel {
    pub metadata: ListingMetadataView,
    pub orders: Vec<OrderView>,
    pub summary: OrderSummaryView,
}

/// View representation of listing metadata
#[derive(Debug, Clone)]
pub struct ListingMetadataView {
    /// Timestamp when the listing was produced
    pub timestamp: String,
    /// Name of the tool that produced the listing
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// Unique listing identifier (`urn:uuid:...`)
    pub listing_id: String,
}

/// View representation of a single order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

/// Totals across all orders in the listing
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummaryView {
    pub order_count: usize,
    pub total_price: f64,
    pub total_tax: f64,
    pub total_final_price: f64,
}
