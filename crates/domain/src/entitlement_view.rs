use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::security::{Permission, ResourceType};

/// One display-ready row of a user's entitlement review listing.
///
/// Projected one-to-one from raw grants: a user with two grants on the same
/// resource sees two rows, each with its own `granted_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitledResource {
    /// Kind of the granted resource.
    pub resource_type: ResourceType,
    /// Id of the granted resource within its kind.
    pub resource_id: String,
    /// Resolved display name, or a synthesized label for orphaned grants.
    pub resource_name: String,
    /// Permissions the grant carries.
    pub permissions: BTreeSet<Permission>,
    /// When the grant was created.
    pub granted_at: DateTime<Utc>,
}
