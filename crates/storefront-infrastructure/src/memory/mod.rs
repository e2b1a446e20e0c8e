pub mod cart_repo_impl;
pub mod order_repo_impl;

pub use cart_repo_impl::InMemoryCartRepository;
pub use order_repo_impl::InMemoryOrderRepository;
