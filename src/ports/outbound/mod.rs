/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (order storage, file system, console).
pub mod formatter;
pub mod order_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::OrderListFormatter;
pub use order_repository::OrderRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
