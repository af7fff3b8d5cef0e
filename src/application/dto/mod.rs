/// Data Transfer Objects for application layer
///
/// DTOs carry choices made by the driver (output format, where orders
/// come from) into the application layer without exposing adapters.
mod output_format;
mod repository_source;

pub use output_format::OutputFormat;
pub use repository_source::RepositorySource;
