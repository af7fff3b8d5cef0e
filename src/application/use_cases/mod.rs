/// Use cases module containing application business logic orchestration
mod list_orders;

pub use list_orders::ListOrdersUseCase;
