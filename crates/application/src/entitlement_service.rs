use std::sync::Arc;

use crate::entitlement_ports::{EntitlementRepository, ResourceCatalog};

mod admin;
mod filters;
mod projection;
mod resolve;


pub use resolve::EntitlementSet;

pub(crate) use filters::retain_entitled;

/// Application service for per-user entitlement decisions.
///
/// Wraps the grant store and the resource catalogs behind the operations the
/// rest of the system needs: resolving a user's effective permissions,
/// filtering resource listings, projecting grants for review, and grant
/// administration.
#[derive(Clone)]
pub struct EntitlementService {
    repository: Arc<dyn EntitlementRepository>,
    catalog: Arc<dyn ResourceCatalog>,
}

impl EntitlementService {
    /// Creates a new entitlement service from port implementations.
    #[must_use]
    pub fn new(
        repository: Arc<dyn EntitlementRepository>,
        catalog: Arc<dyn ResourceCatalog>,
    ) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}
