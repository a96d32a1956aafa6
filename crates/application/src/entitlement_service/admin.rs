use chrono::Utc;
use lumina_core::{AppError, AppResult, RequestIdentity};
use lumina_domain::DataEntitlement;
use uuid::Uuid;

use crate::entitlement_ports::GrantAccessInput;

use super::EntitlementService;

impl EntitlementService {
    /// Creates a grant on behalf of an administrator.
    ///
    /// The acting user is recorded as `granted_by`.
    pub async fn grant_access(
        &self,
        actor: &RequestIdentity,
        input: GrantAccessInput,
    ) -> AppResult<DataEntitlement> {
        self.require_administrator(actor).await?;

        let grant = DataEntitlement::new(
            new_entitlement_id(),
            input.user_id,
            input.resource_type,
            input.resource_id,
            input.permissions,
            Utc::now(),
            actor.user_id(),
        )?;

        self.repository.create_grant(grant).await
    }

    /// Deletes a grant on behalf of an administrator.
    pub async fn revoke_grant(&self, actor: &RequestIdentity, grant_id: &str) -> AppResult<()> {
        self.require_administrator(actor).await?;

        self.repository.delete_grant(grant_id).await
    }

    async fn require_administrator(&self, actor: &RequestIdentity) -> AppResult<()> {
        let entitlements = self.resolve(actor.user_id()).await?;
        if entitlements.is_administrator() {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "user '{}' is not permitted to manage entitlements",
            actor.user_id()
        )))
    }
}

fn new_entitlement_id() -> String {
    let compact = Uuid::new_v4().simple().to_string();

    format!("ent-{}", &compact[..12])
}
