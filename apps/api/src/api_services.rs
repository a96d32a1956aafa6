use std::sync::Arc;

use lumina_application::{
    EntitlementRepository, EntitlementService, MarketplaceService, ResourceCatalog,
};
use lumina_core::{AppError, AppResult};
use lumina_infrastructure::{
    InMemoryEntitlementRepository, InMemoryResourceCatalog, PostgresEntitlementRepository,
    PostgresResourceCatalog,
};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api_config::{ApiConfig, StorageConfig};
use crate::demo_seed;
use crate::state::AppState;

/// Builds the shared application state for the configured storage provider.
pub async fn build_app_state(config: &ApiConfig) -> AppResult<AppState> {
    match &config.storage {
        StorageConfig::Memory { demo_seed: seed } => {
            let repository = Arc::new(InMemoryEntitlementRepository::new());
            let catalog = Arc::new(InMemoryResourceCatalog::new());

            if *seed {
                demo_seed::run(catalog.as_ref(), repository.as_ref()).await?;
            }

            info!("using in-memory storage");
            Ok(assemble(repository, catalog, config))
        }
        StorageConfig::Postgres { database_url } => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to connect to database: {error}"))
                })?;

            sqlx::migrate!("../../crates/infrastructure/migrations")
                .run(&pool)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to run migrations: {error}"))
                })?;

            info!("using postgres storage");
            Ok(assemble(
                Arc::new(PostgresEntitlementRepository::new(pool.clone())),
                Arc::new(PostgresResourceCatalog::new(pool)),
                config,
            ))
        }
    }
}

fn assemble(
    repository: Arc<dyn EntitlementRepository>,
    catalog: Arc<dyn ResourceCatalog>,
    config: &ApiConfig,
) -> AppState {
    let entitlement_service = EntitlementService::new(repository, catalog.clone());
    let marketplace_service = MarketplaceService::new(catalog.clone(), entitlement_service.clone());

    AppState {
        entitlement_service,
        marketplace_service,
        resource_catalog: catalog,
        default_user_id: config.default_user_id.clone(),
        frontend_url: config.frontend_url.clone(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use lumina_application::{EntitlementService, MarketplaceService, ResourceCatalog};
    use lumina_infrastructure::{InMemoryEntitlementRepository, InMemoryResourceCatalog};

    use crate::demo_seed;
    use crate::state::AppState;

    /// Builds an in-memory state pre-loaded with the demo dataset.
    pub(crate) async fn demo_state() -> AppState {
        let repository = Arc::new(InMemoryEntitlementRepository::new());
        let catalog = Arc::new(InMemoryResourceCatalog::new());

        let seeded = demo_seed::run(catalog.as_ref(), repository.as_ref()).await;
        assert!(seeded.is_ok());

        let catalog: Arc<dyn ResourceCatalog> = catalog;
        let entitlement_service = EntitlementService::new(repository, catalog.clone());
        let marketplace_service =
            MarketplaceService::new(catalog.clone(), entitlement_service.clone());

        AppState {
            entitlement_service,
            marketplace_service,
            resource_catalog: catalog,
            default_user_id: Some("user-1".to_owned()),
            frontend_url: "http://localhost:3000".to_owned(),
        }
    }
}
