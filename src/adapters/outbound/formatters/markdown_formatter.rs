use crate::application::read_models::{
    ListingMetadataView, OrderListReadModel, OrderSummaryView, OrderView,
};
use crate::ports::outbound::OrderListFormatter;
use crate::shared::Result;

/// Markdown table header for order rows
const TABLE_HEADER: &str = "| ID | Price | Tax | Final Price |\n";

/// Markdown table separator line, numeric columns right-aligned
const TABLE_SEPARATOR: &str = "|----|------:|----:|------------:|\n";

/// MarkdownFormatter adapter rendering the listing as a Markdown document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_amount(amount: f64) -> String {
        format!("{:.2}", amount)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &ListingMetadataView) {
        output.push_str("# Orders\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp
        ));
        output.push_str(&format!("Listing ID: `{}`\n\n", metadata.listing_id));
    }

    fn render_orders(&self, output: &mut String, orders: &[OrderView]) {
        if orders.is_empty() {
            output.push_str("*No orders found.*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for order in orders {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&order.id),
                Self::format_amount(order.price),
                Self::format_amount(order.tax),
                Self::format_amount(order.final_price)
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, summary: &OrderSummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Orders: {}\n", summary.order_count));
        output.push_str(&format!(
            "- Total price: {}\n",
            Self::format_amount(summary.total_price)
        ));
        output.push_str(&format!(
            "- Total tax: {}\n",
            Self::format_amount(summary.total_tax)
        ));
        output.push_str(&format!(
            "- Total final price: {}\n",
            Self::format_amount(summary.total_final_price)
        ));
    }
}

impl OrderListFormatter for MarkdownFormatter {
    fn format(&self, model: &OrderListReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_orders(&mut output, &model.orders);
        self.render_summary(&mut output, &model.summary);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::OrderListReadModelBuilder;
    use crate::order_listing::domain::{ListingMetadata, Order};

    fn render(orders: &[Order]) -> String {
        let metadata = ListingMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "order-lister".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:abc".to_string(),
        );
        let model = OrderListReadModelBuilder::build(orders, &metadata);
        MarkdownFormatter::new().format(&model).unwrap()
    }

    #[test]
    fn test_format_header() {
        let output = render(&[]);
        assert!(output.starts_with("# Orders\n\n"));
        assert!(output.contains("Generated by order-lister 0.1.0 at 2024-01-01T00:00:00Z"));
        assert!(output.contains("Listing ID: `urn:uuid:abc`"));
    }

    #[test]
    fn test_format_rows_in_repository_order() {
        let output = render(&[Order::new("B-2", 20.0, 2.0), Order::new("A-1", 10.0, 1.5)]);

        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("| B-2 | 20.00 | 2.00 | 22.00 |"));
        assert!(output.contains("| A-1 | 10.00 | 1.50 | 11.50 |"));
        assert!(output.find("B-2").unwrap() < output.find("A-1").unwrap());
    }

    #[test]
    fn test_format_summary() {
        let output = render(&[Order::new("1", 10.0, 1.0), Order::new("2", 5.0, 0.5)]);

        assert!(output.contains("## Summary"));
        assert!(output.contains("- Orders: 2"));
        assert!(output.contains("- Total price: 15.00"));
        assert!(output.contains("- Total tax: 1.50"));
        assert!(output.contains("- Total final price: 16.50"));
    }

    #[test]
    fn test_format_empty_listing() {
        let output = render(&[]);

        assert!(output.contains("*No orders found.*"));
        assert!(!output.contains(TABLE_HEADER));
        assert!(output.contains("- Orders: 0"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );

        let output = render(&[Order::with_id("x|y")]);
        assert!(output.contains("| x\\|y |"));
    }
}
