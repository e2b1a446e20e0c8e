// ============================================================================
// Storefront Core - Storefront Service
// File: crates/storefront-core/src/services/storefront_service.rs
// ============================================================================
//! Menu, cart, and order operations over the repository ports

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{menu, CartEntry, MenuItem, NewOrder, Order};
use crate::error::DomainError;
use crate::repositories::{CartRepository, OrderRepository};

/// Storefront service owning the shared cart and the order log
#[derive(Clone)]
pub struct StorefrontService {
    cart: Arc<dyn CartRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl StorefrontService {
    pub fn new(cart: Arc<dyn CartRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self { cart, orders }
    }

    pub fn menu(&self) -> &'static [MenuItem] {
        menu()
    }

    pub async fn add_to_cart(&self, entry: CartEntry) -> Result<Vec<CartEntry>, DomainError> {
        let cart = self.cart.append(entry).await?;
        info!("Cart entry added, cart size: {}", cart.len());
        Ok(cart)
    }

    pub async fn cart(&self) -> Result<Vec<CartEntry>, DomainError> {
        let cart = self.cart.list().await?;
        debug!("Cart read, {} entries", cart.len());
        Ok(cart)
    }

    pub async fn clear_cart(&self) -> Result<(), DomainError> {
        self.cart.clear().await?;
        info!("Cart cleared");
        Ok(())
    }

    /// Records the order, then empties the cart.
    ///
    /// The submitted items are stored as sent; they are not checked against the cart.
    pub async fn create_order(&self, draft: NewOrder) -> Result<Order, DomainError> {
        let order = self.orders.create(draft).await?;
        self.cart.clear().await?;
        info!("Order {} created with {} items", order.id, order.items.len());
        Ok(order)
    }

    pub async fn orders(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.list().await?;
        debug!("Orders read, {} entries", orders.len());
        Ok(orders)
    }
}
