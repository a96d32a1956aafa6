use std::collections::{BTreeMap, BTreeSet};

use lumina_core::AppResult;
use lumina_domain::{DataEntitlement, Permission, ResourceType};

use super::EntitlementService;

/// Effective permissions of one user, decision-ready.
///
/// Built once per request from the user's flat grant list. Grants for the
/// same `(type, id)` triple union, so the most permissive combination wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntitlementSet {
    administrator: bool,
    entitled: BTreeMap<(ResourceType, Permission), BTreeSet<String>>,
}

impl EntitlementSet {
    /// Builds the decision structure from a user's grants.
    #[must_use]
    pub fn from_grants(grants: &[DataEntitlement]) -> Self {
        // Delete on any resource marks the user as administrator.
        // Deliberate product behavior; see DESIGN.md before changing.
        let administrator = grants.iter().any(|grant| grant.allows(Permission::Delete));

        let mut entitled: BTreeMap<(ResourceType, Permission), BTreeSet<String>> = BTreeMap::new();
        for grant in grants {
            for permission in grant.permissions() {
                entitled
                    .entry((grant.resource_type(), *permission))
                    .or_default()
                    .insert(grant.resource_id().to_owned());
            }
        }

        Self {
            administrator,
            entitled,
        }
    }

    /// Returns whether the user holds the derived administrator signal.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.administrator
    }

    /// Returns whether the user may perform `permission` on one resource.
    ///
    /// Administrators are entitled to everything regardless of per-resource
    /// grants.
    #[must_use]
    pub fn has_permission(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
        permission: Permission,
    ) -> bool {
        if self.administrator {
            return true;
        }

        self.entitled
            .get(&(resource_type, permission))
            .map(|ids| ids.contains(resource_id))
            .unwrap_or(false)
    }

    /// Returns the ids of all resources of one type the user holds
    /// `permission` on.
    ///
    /// Administrators bypass per-resource grants entirely, so this set is
    /// meaningless for them; callers must check [`Self::is_administrator`]
    /// first.
    #[must_use]
    pub fn entitled_ids(
        &self,
        resource_type: ResourceType,
        permission: Permission,
    ) -> BTreeSet<String> {
        self.entitled
            .get(&(resource_type, permission))
            .cloned()
            .unwrap_or_default()
    }
}

impl EntitlementService {
    /// Resolves the effective entitlements of one user.
    ///
    /// An unknown user resolves to an empty, non-administrator set. Store
    /// failure propagates; it is never conflated with "no access".
    pub async fn resolve(&self, user_id: &str) -> AppResult<EntitlementSet> {
        let grants = self.repository.list_grants_for_user(user_id).await?;

        Ok(EntitlementSet::from_grants(&grants))
    }
}
