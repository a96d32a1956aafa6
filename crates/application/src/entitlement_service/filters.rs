use lumina_core::AppResult;
use lumina_domain::{CatalogResource, Dashboard, DataCube, DataSource, Permission};

use super::{EntitlementService, EntitlementSet};

/// Keeps only the resources the set grants `read` on, preserving input
/// order. Administrators receive the input unchanged.
pub(crate) fn retain_entitled<R: CatalogResource>(
    resources: Vec<R>,
    entitlements: &EntitlementSet,
) -> Vec<R> {
    if entitlements.is_administrator() {
        return resources;
    }

    let entitled_ids = entitlements.entitled_ids(R::RESOURCE_TYPE, Permission::Read);
    resources
        .into_iter()
        .filter(|resource| entitled_ids.contains(resource.resource_id()))
        .collect()
}

impl EntitlementService {
    /// Returns the subset of `data_sources` the user may read, in input
    /// order.
    pub async fn filter_data_sources(
        &self,
        data_sources: Vec<DataSource>,
        user_id: &str,
    ) -> AppResult<Vec<DataSource>> {
        let entitlements = self.resolve(user_id).await?;

        Ok(retain_entitled(data_sources, &entitlements))
    }

    /// Returns the subset of `data_cubes` the user may read, in input order.
    pub async fn filter_data_cubes(
        &self,
        data_cubes: Vec<DataCube>,
        user_id: &str,
    ) -> AppResult<Vec<DataCube>> {
        let entitlements = self.resolve(user_id).await?;

        Ok(retain_entitled(data_cubes, &entitlements))
    }

    /// Returns the subset of `dashboards` the user may read, in input order.
    pub async fn filter_dashboards(
        &self,
        dashboards: Vec<Dashboard>,
        user_id: &str,
    ) -> AppResult<Vec<Dashboard>> {
        let entitlements = self.resolve(user_id).await?;

        Ok(retain_entitled(dashboards, &entitlements))
    }
}
