//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod entitlement_view;
mod principal;
mod resource;
mod security;

pub use entitlement_view::EntitledResource;
pub use principal::{EmailAddress, Principal, UserRole};
pub use resource::{
    CatalogResource, ConnectionStatus, Dashboard, DashboardWidget, DataCube, DataSource,
    DataSourceKind, WidgetType,
};
pub use security::{DataEntitlement, Permission, ResourceType};
