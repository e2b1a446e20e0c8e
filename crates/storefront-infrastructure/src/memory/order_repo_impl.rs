// ============================================================================
// Storefront Infrastructure - In-Memory Order Repository
// File: crates/storefront-infrastructure/src/memory/order_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use storefront_core::domain::{NewOrder, Order};
use storefront_core::error::DomainError;
use storefront_core::repositories::OrderRepository;

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
    last_id: AtomicU64,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, draft: NewOrder) -> Result<Order, DomainError> {
        // Id is taken under the write lock so ids follow append order.
        let mut orders = self.orders.write();
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let order = Order::place(id, draft);
        orders.push(order.clone());
        Ok(order)
    }

    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.read().clone())
    }
}
