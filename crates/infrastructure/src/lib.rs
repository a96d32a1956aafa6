//! Infrastructure adapters for the application ports.

#![forbid(unsafe_code)]

mod in_memory_entitlement_repository;
mod in_memory_resource_catalog;
mod postgres_entitlement_repository;
mod postgres_resource_catalog;

pub use in_memory_entitlement_repository::InMemoryEntitlementRepository;
pub use in_memory_resource_catalog::InMemoryResourceCatalog;
pub use postgres_entitlement_repository::PostgresEntitlementRepository;
pub use postgres_resource_catalog::PostgresResourceCatalog;
