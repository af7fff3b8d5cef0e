/// Filesystem adapters for file I/O operations
mod file_writer;
mod json_order_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_order_repository::JsonFileOrderRepository;
