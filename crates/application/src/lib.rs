//! Application services and ports.

#![forbid(unsafe_code)]

mod entitlement_ports;
mod entitlement_service;
mod marketplace_service;

pub use entitlement_ports::{EntitlementRepository, GrantAccessInput, ResourceCatalog};
pub use entitlement_service::{EntitlementService, EntitlementSet};
pub use marketplace_service::{MarketplaceService, MarketplaceView};
