/// Mock implementations for testing
mod mock_order_repository;

pub use mock_order_repository::{ConnectivityError, MockOrderRepository};
