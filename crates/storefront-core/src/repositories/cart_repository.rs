//! Cart repository trait (port)

use async_trait::async_trait;
use crate::domain::CartEntry;
use crate::error::DomainError;

/// The single shared cart. Entries keep insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Appends an entry and returns the cart as it stands afterwards.
    async fn append(&self, entry: CartEntry) -> Result<Vec<CartEntry>, DomainError>;
    async fn list(&self) -> Result<Vec<CartEntry>, DomainError>;
    async fn clear(&self) -> Result<(), DomainError>;
}
