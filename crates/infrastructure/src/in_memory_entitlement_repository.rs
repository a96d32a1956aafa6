use std::collections::HashMap;

use async_trait::async_trait;
use lumina_application::EntitlementRepository;
use lumina_core::{AppError, AppResult};
use lumina_domain::DataEntitlement;
use tokio::sync::RwLock;

/// In-memory grant store indexed by user id.
///
/// Grants are bucketed per user so `list_grants_for_user` avoids a full
/// scan; each bucket keeps insertion order, which is the order the
/// projection listing shows.
#[derive(Debug, Default)]
pub struct InMemoryEntitlementRepository {
    grants_by_user: RwLock<HashMap<String, Vec<DataEntitlement>>>,
}

impl InMemoryEntitlementRepository {
    /// Creates an empty in-memory grant store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grants_by_user: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EntitlementRepository for InMemoryEntitlementRepository {
    async fn list_grants_for_user(&self, user_id: &str) -> AppResult<Vec<DataEntitlement>> {
        Ok(self
            .grants_by_user
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_grant(&self, grant: DataEntitlement) -> AppResult<DataEntitlement> {
        let mut grants_by_user = self.grants_by_user.write().await;

        let duplicate = grants_by_user
            .values()
            .flatten()
            .any(|existing| existing.id() == grant.id());
        if duplicate {
            return Err(AppError::Conflict(format!(
                "entitlement '{}' already exists",
                grant.id()
            )));
        }

        grants_by_user
            .entry(grant.user_id().to_owned())
            .or_default()
            .push(grant.clone());

        Ok(grant)
    }

    async fn delete_grant(&self, grant_id: &str) -> AppResult<()> {
        let mut grants_by_user = self.grants_by_user.write().await;

        for user_grants in grants_by_user.values_mut() {
            let before = user_grants.len();
            user_grants.retain(|grant| grant.id() != grant_id);
            if user_grants.len() < before {
                return Ok(());
            }
        }

        Err(AppError::NotFound(format!(
            "entitlement '{grant_id}' does not exist"
        )))
    }
}
