use async_trait::async_trait;
use order_lister::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Error returned by [`MockOrderRepository::with_connectivity_failure`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("could not connect to order store at {0}")]
pub struct ConnectivityError(pub String);

/// Mock OrderRepository for testing
///
/// Clones share the call counter, so a clone can be handed to the use
/// case while the test keeps one for assertions.
#[derive(Clone, Default)]
pub struct MockOrderRepository {
    pub orders: Vec<Order>,
    pub failure: Option<ConnectivityError>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Default::default()
        }
    }

    pub fn with_connectivity_failure(address: &str) -> Self {
        Self {
            failure: Some(ConnectivityError(address.to_string())),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn get_orders(&self) -> Result<Vec<Order>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.failure {
            return Err(failure.clone().into());
        }
        Ok(self.orders.clone())
    }
}
