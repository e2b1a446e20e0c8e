//! # Storefront API
//! 
//! HTTP handlers, request schemas, error mapping, and routing.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
