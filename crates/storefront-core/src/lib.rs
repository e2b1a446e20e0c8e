//! # Storefront Core
//! 
//! Domain entities, repository traits, and the storefront service.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use services::StorefrontService;
