//! # Storefront Shared
//! 
//! Configuration, telemetry, timestamps, and shared error types for the storefront.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod time;

pub use error::AppError;
