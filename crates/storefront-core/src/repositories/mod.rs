//! Repository traits (ports)

pub mod cart_repository;
pub mod order_repository;

pub use cart_repository::CartRepository;
pub use order_repository::OrderRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
