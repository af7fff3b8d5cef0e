/// Network adapters for remote order services
mod http_order_repository;

pub use http_order_repository::HttpOrderRepository;
