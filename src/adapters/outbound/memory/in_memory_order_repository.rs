use crate::order_listing::domain::Order;
use crate::ports::outbound::OrderRepository;
use crate::shared::Result;
use async_trait::async_trait;

/// InMemoryOrderRepository adapter backed by a vector
///
/// Useful for embedding the use case in tests or demos. Each call returns
/// a fresh copy of the stored orders.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }
}

impl From<Vec<Order>> for InMemoryOrderRepository {
    fn from(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
