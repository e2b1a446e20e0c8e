//! Domain entities

pub mod cart;
pub mod menu;
pub mod order;

pub use cart::CartEntry;
pub use menu::{menu, MenuItem};
pub use order::{NewOrder, Order, OrderStatus};
