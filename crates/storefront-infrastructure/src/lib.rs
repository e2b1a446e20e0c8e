//! # Storefront Infrastructure
//! 
//! Process-memory implementations of the storefront repository ports.
//! State lives for the process lifetime and is lost on restart.

pub mod memory;

pub use memory::{InMemoryCartRepository, InMemoryOrderRepository};
