/// In-process adapters with no external I/O
mod in_memory_order_repository;

pub use in_memory_order_repository::InMemoryOrderRepository;
