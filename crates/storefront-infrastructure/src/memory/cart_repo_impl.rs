// ============================================================================
// Storefront Infrastructure - In-Memory Cart Repository
// File: crates/storefront-infrastructure/src/memory/cart_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use storefront_core::domain::CartEntry;
use storefront_core::error::DomainError;
use storefront_core::repositories::CartRepository;

/// One cart shared by every client. Concurrent add/clear is last-write-wins.
#[derive(Default)]
pub struct InMemoryCartRepository {
    entries: Mutex<Vec<CartEntry>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn append(&self, entry: CartEntry) -> Result<Vec<CartEntry>, DomainError> {
        let mut entries = self.entries.lock();
        entries.push(entry);
        Ok(entries.clone())
    }

    async fn list(&self) -> Result<Vec<CartEntry>, DomainError> {
        Ok(self.entries.lock().clone())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let dropped = std::mem::take(&mut *self.entries.lock());
        debug!("Dropped {} cart entries", dropped.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let repo = InMemoryCartRepository::new();
        for id in 1..=3 {
            repo.append(CartEntry::from(json!({ "id": id }))).await.unwrap();
        }

        let ids: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.0["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn test_append_returns_snapshot() {
        let repo = InMemoryCartRepository::new();
        let first = repo.append(CartEntry::from(json!("a"))).await.unwrap();
        let second = repo.append(CartEntry::from(json!("b"))).await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let repo = InMemoryCartRepository::new();
        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        repo.append(CartEntry::absent()).await.unwrap();
        repo.clear().await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
