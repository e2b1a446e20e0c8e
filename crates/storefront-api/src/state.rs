use storefront_core::StorefrontService;

#[derive(Clone)]
pub struct AppState {
    pub service: StorefrontService,
}

impl AppState {
    pub fn new(service: StorefrontService) -> Self {
        Self { service }
    }
}
