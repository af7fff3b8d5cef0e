use crate::order_listing::domain::Order;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// OrderRepository port for retrieving orders
///
/// This port abstracts where orders live (memory, a JSON file, a remote
/// order service). Implementations own any timeout, retry or cancellation
/// policy; callers get a single answer per call.
///
/// Implementations must be `Send + Sync` so one repository can back
/// concurrent callers.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Returns every order known to the backing store at call time
    ///
    /// # Errors
    /// Returns an error if the store cannot be read. The cause is
    /// implementation specific.
    async fn get_orders(&self) -> Result<Vec<Order>>;
}

#[async_trait]
impl<R: OrderRepository + ?Sized> OrderRepository for Arc<R> {
    async fn get_orders(&self) -> Result<Vec<Order>> {
        (**self).get_orders().await
    }
}

#[async_trait]
impl<R: OrderRepository + ?Sized> OrderRepository for Box<R> {
    async fn get_orders(&self) -> Result<Vec<Order>> {
        (**self).get_orders().await
    }
}
