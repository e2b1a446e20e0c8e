//! Order repository trait (port)

use async_trait::async_trait;
use crate::domain::{NewOrder, Order};
use crate::error::DomainError;

/// Append-only order log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Assigns the next id, stamps the order, and appends it in one step.
    async fn create(&self, draft: NewOrder) -> Result<Order, DomainError>;
    async fn list(&self) -> Result<Vec<Order>, DomainError>;
}
