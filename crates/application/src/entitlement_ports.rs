use async_trait::async_trait;
use lumina_core::AppResult;
use lumina_domain::{Dashboard, DataCube, DataEntitlement, DataSource, Permission, ResourceType};

/// Repository port for grant storage.
#[async_trait]
pub trait EntitlementRepository: Send + Sync {
    /// Lists all grants for a user in the store's original order.
    ///
    /// An unknown user yields an empty list; only store unavailability is an
    /// error.
    async fn list_grants_for_user(&self, user_id: &str) -> AppResult<Vec<DataEntitlement>>;

    /// Persists a new grant and returns the stored record.
    async fn create_grant(&self, grant: DataEntitlement) -> AppResult<DataEntitlement>;

    /// Deletes a grant by its record id.
    async fn delete_grant(&self, grant_id: &str) -> AppResult<()>;
}

/// Read port over the resource catalogs entitlements refer to.
#[async_trait]
pub trait ResourceCatalog: Send + Sync {
    /// Lists all data sources, id-sorted.
    async fn list_data_sources(&self) -> AppResult<Vec<DataSource>>;

    /// Lists all data cubes, id-sorted.
    async fn list_data_cubes(&self) -> AppResult<Vec<DataCube>>;

    /// Lists all dashboards, id-sorted.
    async fn list_dashboards(&self) -> AppResult<Vec<Dashboard>>;

    /// Resolves the display name of one resource of the given type.
    async fn find_display_name(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> AppResult<Option<String>>;
}

/// Input for creating a grant through the administration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantAccessInput {
    /// User the grant applies to.
    pub user_id: String,
    /// Kind of the granted resource.
    pub resource_type: ResourceType,
    /// Id of the granted resource within its kind.
    pub resource_id: String,
    /// Permissions to grant; must not be empty.
    pub permissions: Vec<Permission>,
}
