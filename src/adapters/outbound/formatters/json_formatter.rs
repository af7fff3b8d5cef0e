use crate::application::read_models::{
    ListingMetadataView, OrderListReadModel, OrderSummaryView, OrderView,
};
use crate::ports::outbound::OrderListFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    metadata: Metadata<'a>,
    orders: Vec<OrderEntry<'a>>,
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    #[serde(rename = "listingId")]
    listing_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

/// Same field names as the input orders file so output can be fed back in
#[derive(Debug, Serialize)]
struct OrderEntry<'a> {
    id: &'a str,
    price: f64,
    tax: f64,
    final_price: f64,
}

#[derive(Debug, Serialize)]
struct Summary {
    #[serde(rename = "orderCount")]
    order_count: usize,
    #[serde(rename = "totalPrice")]
    total_price: f64,
    #[serde(rename = "totalTax")]
    total_tax: f64,
    #[serde(rename = "totalFinalPrice")]
    total_final_price: f64,
}

/// JsonFormatter adapter rendering the listing as a pretty JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn metadata(view: &ListingMetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &view.timestamp,
            tool: Tool {
                name: &view.tool_name,
                version: &view.tool_version,
            },
            listing_id: &view.listing_id,
        }
    }

    fn order(view: &OrderView) -> OrderEntry<'_> {
        OrderEntry {
            id: &view.id,
            price: view.price,
            tax: view.tax,
            final_price: view.final_price,
        }
    }

    fn summary(view: &OrderSummaryView) -> Summary {
        Summary {
            order_count: view.order_count,
            total_price: view.total_price,
            total_tax: view.total_tax,
            total_final_price: view.total_final_price,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderListFormatter for JsonFormatter {
    fn format(&self, model: &OrderListReadModel) -> Result<String> {
        let document = Document {
            metadata: Self::metadata(&model.metadata),
            orders: model.orders.iter().map(Self::order).collect(),
            summary: Self::summary(&model.summary),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
