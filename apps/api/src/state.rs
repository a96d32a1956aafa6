use std::sync::Arc;

use lumina_application::{EntitlementService, MarketplaceService, ResourceCatalog};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub entitlement_service: EntitlementService,
    pub marketplace_service: MarketplaceService,
    pub resource_catalog: Arc<dyn ResourceCatalog>,
    pub default_user_id: Option<String>,
    pub frontend_url: String,
}
