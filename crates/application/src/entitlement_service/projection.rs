use lumina_core::AppResult;
use lumina_domain::EntitledResource;

use super::EntitlementService;

impl EntitlementService {
    /// Projects a user's raw grants into display-ready entitlement rows.
    ///
    /// Emits one row per grant in store order, without merging grants for
    /// the same resource. A grant whose resource no longer exists in the
    /// catalog gets a synthesized label instead of failing the projection;
    /// store and catalog unavailability propagate.
    pub async fn project_for_user(&self, user_id: &str) -> AppResult<Vec<EntitledResource>> {
        let grants = self.repository.list_grants_for_user(user_id).await?;

        let mut views = Vec::with_capacity(grants.len());
        for grant in grants {
            let resource_name = self
                .catalog
                .find_display_name(grant.resource_type(), grant.resource_id())
                .await?
                .unwrap_or_else(|| {
                    grant
                        .resource_type()
                        .fallback_display_name(grant.resource_id())
                });

            views.push(EntitledResource {
                resource_type: grant.resource_type(),
                resource_id: grant.resource_id().to_owned(),
                resource_name,
                permissions: grant.permissions().clone(),
                granted_at: grant.granted_at(),
            });
        }

        Ok(views)
    }
}
