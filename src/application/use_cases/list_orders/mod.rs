use crate::order_listing::domain::Order;
use crate::ports::outbound::OrderRepository;
use crate::shared::Result;

/// ListOrdersUseCase - returns every order the repository knows about
///
/// The use case is a pure pass-through: the orders come back exactly as
/// the repository returned them, and a repository failure comes back as
/// the very same error value. There is no filtering, sorting, caching,
/// retrying or logging at this layer.
///
/// # Type Parameters
/// * `R` - OrderRepository implementation
pub struct ListOrdersUseCase<R> {
    order_repository: R,
}

impl<R> ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    /// Creates a new ListOrdersUseCase around the injected repository
    pub fn new(order_repository: R) -> Self {
        Self { order_repository }
    }

    /// Fetches all orders
    ///
    /// Calls [`OrderRepository::get_orders`] exactly once per invocation.
    ///
    /// # Errors
    /// Returns the repository's error unchanged
    pub async fn execute(&self) -> Result<Vec<Order>> {
        self.order_repository.get_orders().await
    }
}
