//! Read models for CQRS-lite pattern
//!
//! View-optimized structs built from use-case output for the formatters.

mod order_list_read_model;
mod order_list_read_model_builder;

pub use order_list_read_model::{
    ListingMetadataView, OrderListReadModel, OrderSummaryView, OrderView,
};
pub use order_list_read_model_builder::OrderListReadModelBuilder;
