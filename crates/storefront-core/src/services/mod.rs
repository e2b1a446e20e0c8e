pub mod storefront_service;

pub use storefront_service::StorefrontService;
