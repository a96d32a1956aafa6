use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lumina_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Permissions a grant can carry on a single resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows reading the resource and seeing it in listings.
    Read,
    /// Allows modifying the resource.
    Write,
    /// Allows deleting the resource.
    Delete,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[Permission::Read, Permission::Write, Permission::Delete];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "delete" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

/// Kinds of resources subject to access control.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    /// A connected database or warehouse.
    DataSource,
    /// A saved semantic query over a data source.
    DataCube,
    /// A widget collection rendered over a data cube.
    Dashboard,
}

impl ResourceType {
    /// Returns a stable storage value for this resource type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataSource => "dataSource",
            Self::DataCube => "dataCube",
            Self::Dashboard => "dashboard",
        }
    }

    /// Returns the human-readable label used in synthesized display names.
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::DataSource => "Data Source",
            Self::DataCube => "Data Cube",
            Self::Dashboard => "Dashboard",
        }
    }

    /// Synthesizes a display name for a resource that cannot be looked up.
    #[must_use]
    pub fn fallback_display_name(&self, resource_id: &str) -> String {
        format!("{} {resource_id}", self.display_label())
    }

    /// Returns all known resource types.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ResourceType] = &[
            ResourceType::DataSource,
            ResourceType::DataCube,
            ResourceType::Dashboard,
        ];

        ALL
    }
}

impl FromStr for ResourceType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dataSource" => Ok(Self::DataSource),
            "dataCube" => Ok(Self::DataCube),
            "dashboard" => Ok(Self::Dashboard),
            _ => Err(AppError::Validation(format!(
                "unknown resource type value '{value}'"
            ))),
        }
    }
}

/// One grant record: a user's permissions on a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntitlement {
    id: NonEmptyString,
    user_id: NonEmptyString,
    resource_type: ResourceType,
    resource_id: NonEmptyString,
    permissions: BTreeSet<Permission>,
    granted_at: DateTime<Utc>,
    granted_by: NonEmptyString,
}

impl DataEntitlement {
    /// Creates a validated grant record.
    ///
    /// A grant with no permissions is semantically equivalent to no grant and
    /// is rejected here; duplicate permissions collapse into the set.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        resource_type: ResourceType,
        resource_id: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
        granted_at: DateTime<Utc>,
        granted_by: impl Into<String>,
    ) -> AppResult<Self> {
        let permissions: BTreeSet<Permission> = permissions.into_iter().collect();
        if permissions.is_empty() {
            return Err(AppError::Validation(
                "a grant must carry at least one permission".to_owned(),
            ));
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            user_id: NonEmptyString::new(user_id)?,
            resource_type,
            resource_id: NonEmptyString::new(resource_id)?,
            permissions,
            granted_at,
            granted_by: NonEmptyString::new(granted_by)?,
        })
    }

    /// Returns the stable id of the grant record itself.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the user this grant applies to.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Returns the kind of the granted resource.
    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Returns the id of the granted resource within its kind.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        self.resource_id.as_str()
    }

    /// Returns the granted permission set.
    #[must_use]
    pub fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }

    /// Returns whether this grant carries the permission.
    #[must_use]
    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns when the grant was created.
    #[must_use]
    pub fn granted_at(&self) -> DateTime<Utc> {
        self.granted_at
    }

    /// Returns who created the grant (a user id, or `system`).
    #[must_use]
    pub fn granted_by(&self) -> &str {
        self.granted_by.as_str()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Utc;
    use proptest::prelude::*;

    use super::{DataEntitlement, Permission, ResourceType};

    #[test]
    fn permission_roundtrip_storage_value() {
        for permission in Permission::all() {
            let restored = Permission::from_str(permission.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Permission::Read), *permission);
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("admin");
        assert!(parsed.is_err());
    }

    #[test]
    fn resource_type_roundtrip_storage_value() {
        for resource_type in ResourceType::all() {
            let restored = ResourceType::from_str(resource_type.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(ResourceType::Dashboard), *resource_type);
        }
    }

    #[test]
    fn fallback_display_name_carries_type_label() {
        assert_eq!(
            ResourceType::DataCube.fallback_display_name("cube-9"),
            "Data Cube cube-9"
        );
    }

    #[test]
    fn grant_rejects_empty_permission_set() {
        let grant = DataEntitlement::new(
            "ent-1",
            "user-2",
            ResourceType::DataCube,
            "cube-1",
            Vec::new(),
            Utc::now(),
            "system",
        );
        assert!(grant.is_err());
    }

    #[test]
    fn grant_collapses_duplicate_permissions() {
        let grant = DataEntitlement::new(
            "ent-1",
            "user-2",
            ResourceType::DataCube,
            "cube-1",
            vec![Permission::Read, Permission::Read, Permission::Write],
            Utc::now(),
            "system",
        );
        assert!(grant.is_ok());
        assert_eq!(
            grant.map(|value| value.permissions().len()).unwrap_or(0),
            2
        );
    }

    proptest! {
        #[test]
        fn grant_permissions_ignore_input_order(
            permissions in proptest::sample::subsequence(
                vec![Permission::Read, Permission::Write, Permission::Delete],
                1..=3,
            ),
            mut shuffled in proptest::sample::subsequence(
                vec![Permission::Delete, Permission::Write, Permission::Read],
                0..=3,
            ),
        ) {
            shuffled.extend(permissions.iter().copied());
            shuffled.retain(|permission| permissions.contains(permission));

            let left = DataEntitlement::new(
                "ent-1",
                "user-2",
                ResourceType::Dashboard,
                "dash-1",
                permissions,
                Utc::now(),
                "system",
            );
            let right = DataEntitlement::new(
                "ent-1",
                "user-2",
                ResourceType::Dashboard,
                "dash-1",
                shuffled,
                Utc::now(),
                "system",
            );

            prop_assert!(left.is_ok());
            prop_assert!(right.is_ok());
            prop_assert_eq!(
                left.map(|value| value.permissions().clone()).unwrap_or_default(),
                right.map(|value| value.permissions().clone()).unwrap_or_default()
            );
        }
    }
}
