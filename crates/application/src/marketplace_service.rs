use std::sync::Arc;

use lumina_core::AppResult;
use lumina_domain::{Dashboard, DataCube, DataSource};

use crate::entitlement_ports::ResourceCatalog;
use crate::entitlement_service::{EntitlementService, retain_entitled};

/// All three resource collections, filtered for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceView {
    /// Data sources the user may read.
    pub data_sources: Vec<DataSource>,
    /// Data cubes the user may read.
    pub data_cubes: Vec<DataCube>,
    /// Dashboards the user may read.
    pub dashboards: Vec<Dashboard>,
}

/// Application service for the grouped marketplace listing.
#[derive(Clone)]
pub struct MarketplaceService {
    catalog: Arc<dyn ResourceCatalog>,
    entitlement_service: EntitlementService,
}

impl MarketplaceService {
    /// Creates a new marketplace service.
    #[must_use]
    pub fn new(catalog: Arc<dyn ResourceCatalog>, entitlement_service: EntitlementService) -> Self {
        Self {
            catalog,
            entitlement_service,
        }
    }

    /// Returns every catalog collection filtered by the user's entitlements.
    ///
    /// Resolves the user once and applies the same set to all three
    /// collections.
    pub async fn browse(&self, user_id: &str) -> AppResult<MarketplaceView> {
        let entitlements = self.entitlement_service.resolve(user_id).await?;

        let data_sources = self.catalog.list_data_sources().await?;
        let data_cubes = self.catalog.list_data_cubes().await?;
        let dashboards = self.catalog.list_dashboards().await?;

        Ok(MarketplaceView {
            data_sources: retain_entitled(data_sources, &entitlements),
            data_cubes: retain_entitled(data_cubes, &entitlements),
            dashboards: retain_entitled(dashboards, &entitlements),
        })
    }
}
