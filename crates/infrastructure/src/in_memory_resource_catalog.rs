use std::collections::HashMap;

use async_trait::async_trait;
use lumina_application::ResourceCatalog;
use lumina_core::AppResult;
use lumina_domain::{Dashboard, DataCube, DataSource, ResourceType};
use tokio::sync::RwLock;

/// In-memory resource catalog implementation.
#[derive(Debug, Default)]
pub struct InMemoryResourceCatalog {
    data_sources: RwLock<HashMap<String, DataSource>>,
    data_cubes: RwLock<HashMap<String, DataCube>>,
    dashboards: RwLock<HashMap<String, Dashboard>>,
}

impl InMemoryResourceCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_sources: RwLock::new(HashMap::new()),
            data_cubes: RwLock::new(HashMap::new()),
            dashboards: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or replaces a data source.
    pub async fn insert_data_source(&self, data_source: DataSource) {
        self.data_sources
            .write()
            .await
            .insert(data_source.id().to_owned(), data_source);
    }

    /// Inserts or replaces a data cube.
    pub async fn insert_data_cube(&self, data_cube: DataCube) {
        self.data_cubes
            .write()
            .await
            .insert(data_cube.id().to_owned(), data_cube);
    }

    /// Inserts or replaces a dashboard.
    pub async fn insert_dashboard(&self, dashboard: Dashboard) {
        self.dashboards
            .write()
            .await
            .insert(dashboard.id().to_owned(), dashboard);
    }
}

#[async_trait]
impl ResourceCatalog for InMemoryResourceCatalog {
    async fn list_data_sources(&self) -> AppResult<Vec<DataSource>> {
        let data_sources = self.data_sources.read().await;

        let mut values: Vec<DataSource> = data_sources.values().cloned().collect();
        values.sort_by(|left, right| left.id().cmp(right.id()));

        Ok(values)
    }

    async fn list_data_cubes(&self) -> AppResult<Vec<DataCube>> {
        let data_cubes = self.data_cubes.read().await;

        let mut values: Vec<DataCube> = data_cubes.values().cloned().collect();
        values.sort_by(|left, right| left.id().cmp(right.id()));

        Ok(values)
    }

    async fn list_dashboards(&self) -> AppResult<Vec<Dashboard>> {
        let dashboards = self.dashboards.read().await;

        let mut values: Vec<Dashboard> = dashboards.values().cloned().collect();
        values.sort_by(|left, right| left.id().cmp(right.id()));

        Ok(values)
    }

    async fn find_display_name(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> AppResult<Option<String>> {
        let name = match resource_type {
            ResourceType::DataSource => self
                .data_sources
                .read()
                .await
                .get(resource_id)
                .map(|source| source.name().to_owned()),
            ResourceType::DataCube => self
                .data_cubes
                .read()
                .await
                .get(resource_id)
                .map(|cube| cube.name().to_owned()),
            ResourceType::Dashboard => self
                .dashboards
                .read()
                .await
                .get(resource_id)
                .map(|dashboard| dashboard.name().to_owned()),
        };

        Ok(name)
    }
}
