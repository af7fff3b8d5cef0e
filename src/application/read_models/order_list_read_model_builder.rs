//! Builder for constructing OrderListReadModel from domain objects

use super::order_list_read_model::{
    ListingMetadataView, OrderListReadModel, OrderSummaryView, OrderView,
};
use crate::order_listing::domain::{ListingMetadata, Order};

/// Builder for constructing OrderListReadModel from domain objects
pub struct OrderListReadModelBuilder;

impl OrderListReadModelBuilder {
    /// Builds the read model; orders keep the sequence they arrived in
    pub fn build(orders: &[Order], metadata: &ListingMetadata) -> OrderListReadModel {
        OrderListReadModel {
            metadata: Self::build_metadata(metadata),
            orders: orders.iter().map(Self::build_order).collect(),
            summary: Self::build_summary(orders),
        }
    }

    fn build_metadata(metadata: &ListingMetadata) -> ListingMetadataView {
        ListingMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            listing_id: metadata.listing_id().to_string(),
        }
    }

    fn build_order(order: &Order) -> OrderView {
        OrderView {
            id: order.id.clone(),
            price: order.price,
            tax: order.tax,
            final_price: order.final_price,
        }
    }

    fn build_summary(orders: &[Order]) -> OrderSummaryView {
        OrderSummaryView {
            order_count: orders.len(),
            total_price: orders.iter().map(|o| o.price).sum(),
            total_tax: orders.iter().map(|o| o.tax).sum(),
            total_final_price: orders.iter().map(|o| o.final_price).sum(),
        }
    }
}
