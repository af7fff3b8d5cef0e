use crate::application::read_models::OrderListReadModel;
use crate::shared::Result;

/// OrderListFormatter port for rendering an order listing
///
/// This port abstracts the output format (JSON, Markdown, ...).
pub trait OrderListFormatter {
    /// Renders the listing read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &OrderListReadModel) -> Result<String>;
}
