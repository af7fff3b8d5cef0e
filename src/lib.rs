//! order-lister - list orders through a single pass-through use case
//!
//! The core of the crate is [`ListOrdersUseCase`](application::use_cases::ListOrdersUseCase):
//! it asks an [`OrderRepository`](ports::outbound::OrderRepository) for every
//! order and returns the answer untouched, success or failure.
//! Everything else is infrastructure around it, following hexagonal
//! architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`order_listing`): the order record and listing metadata
//! - **Application Layer** (`application`): the use case, DTOs, read models and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): in-memory, JSON file and HTTP repositories,
//!   formatters and presenters
//! - **Shared** (`shared`): error types, result alias and security helpers
//!
//! # Example
//!
//! ```
//! use order_lister::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let repository = InMemoryOrderRepository::new()
//!     .with_order(Order::new("1", 100.0, 10.0))
//!     .with_order(Order::new("2", 50.0, 5.0));
//!
//! let use_case = ListOrdersUseCase::new(repository);
//! let orders = use_case.execute().await?;
//!
//! assert_eq!(orders.len(), 2);
//! assert_eq!(orders[0].final_price, 110.0);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod order_listing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileOrderRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryOrderRepository;
    pub use crate::adapters::outbound::network::HttpOrderRepository;
    pub use crate::application::dto::{OutputFormat, RepositorySource};
    pub use crate::application::read_models::{OrderListReadModel, OrderListReadModelBuilder};
    pub use crate::application::use_cases::ListOrdersUseCase;
    pub use crate::order_listing::domain::{ListingMetadata, Order};
    pub use crate::order_listing::services::ListingMetadataGenerator;
    pub use crate::ports::outbound::{
        OrderListFormatter, OrderRepository, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, OrderError};
    pub use crate::shared::Result;
}
