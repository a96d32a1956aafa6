use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lumina_application::ResourceCatalog;
use lumina_core::{AppError, AppResult};
use lumina_domain::{
    ConnectionStatus, Dashboard, DashboardWidget, DataCube, DataSource, DataSourceKind,
    ResourceType,
};
use sqlx::{FromRow, PgPool};

/// PostgreSQL-backed resource catalog.
#[derive(Clone)]
pub struct PostgresResourceCatalog {
    pool: PgPool,
}

impl PostgresResourceCatalog {
    /// Creates a catalog with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DataSourceRow {
    id: String,
    name: String,
    kind: String,
    host: String,
    port: i32,
    database_name: String,
    username: String,
    status: String,
    last_sync: Option<DateTime<Utc>>,
}

impl DataSourceRow {
    fn into_domain(self) -> AppResult<DataSource> {
        let id = self.id;
        let kind = DataSourceKind::from_str(self.kind.as_str()).map_err(|error| {
            AppError::Internal(format!("failed to decode data source '{id}': {error}"))
        })?;
        let status = ConnectionStatus::from_str(self.status.as_str()).map_err(|error| {
            AppError::Internal(format!("failed to decode data source '{id}': {error}"))
        })?;
        let port = u16::try_from(self.port).map_err(|error| {
            AppError::Internal(format!("failed to decode data source '{id}': {error}"))
        })?;

        DataSource::new(
            id.clone(),
            self.name,
            kind,
            self.host,
            port,
            self.database_name,
            self.username,
            status,
            self.last_sync,
        )
        .map_err(|error| AppError::Internal(format!("invalid stored data source '{id}': {error}")))
    }
}

#[derive(Debug, FromRow)]
struct DataCubeRow {
    id: String,
    name: String,
    description: String,
    query: String,
    data_source_id: String,
    dimensions: serde_json::Value,
    measures: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl DataCubeRow {
    fn into_domain(self) -> AppResult<DataCube> {
        let id = self.id;
        let dimensions: Vec<String> = serde_json::from_value(self.dimensions).map_err(|error| {
            AppError::Internal(format!("failed to decode data cube '{id}': {error}"))
        })?;
        let measures: Vec<String> = serde_json::from_value(self.measures).map_err(|error| {
            AppError::Internal(format!("failed to decode data cube '{id}': {error}"))
        })?;

        DataCube::new(
            id.clone(),
            self.name,
            self.description,
            self.query,
            self.data_source_id,
            dimensions,
            measures,
            self.created_at,
        )
        .map_err(|error| AppError::Internal(format!("invalid stored data cube '{id}': {error}")))
    }
}

#[derive(Debug, FromRow)]
struct DashboardRow {
    id: String,
    name: String,
    description: String,
    data_cube_id: String,
    widgets: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DashboardRow {
    fn into_domain(self) -> AppResult<Dashboard> {
        let id = self.id;
        let widgets: Vec<DashboardWidget> =
            serde_json::from_value(self.widgets).map_err(|error| {
                AppError::Internal(format!("failed to decode dashboard '{id}': {error}"))
            })?;

        Dashboard::new(
            id.clone(),
            self.name,
            self.description,
            self.data_cube_id,
            widgets,
            self.created_at,
            self.updated_at,
        )
        .map_err(|error| AppError::Internal(format!("invalid stored dashboard '{id}': {error}")))
    }
}

#[async_trait]
impl ResourceCatalog for PostgresResourceCatalog {
    async fn list_data_sources(&self) -> AppResult<Vec<DataSource>> {
        let rows = sqlx::query_as::<_, DataSourceRow>(
            r#"
            SELECT id, name, kind, host, port, database_name, username, status, last_sync
            FROM data_sources
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load data sources: {error}")))?;

        rows.into_iter().map(DataSourceRow::into_domain).collect()
    }

    async fn list_data_cubes(&self) -> AppResult<Vec<DataCube>> {
        let rows = sqlx::query_as::<_, DataCubeRow>(
            r#"
            SELECT id, name, description, query, data_source_id, dimensions, measures, created_at
            FROM data_cubes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load data cubes: {error}")))?;

        rows.into_iter().map(DataCubeRow::into_domain).collect()
    }

    async fn list_dashboards(&self) -> AppResult<Vec<Dashboard>> {
        let rows = sqlx::query_as::<_, DashboardRow>(
            r#"
            SELECT id, name, description, data_cube_id, widgets, created_at, updated_at
            FROM dashboards
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load dashboards: {error}")))?;

        rows.into_iter().map(DashboardRow::into_domain).collect()
    }

    async fn find_display_name(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> AppResult<Option<String>> {
        let query = match resource_type {
            ResourceType::DataSource => "SELECT name FROM data_sources WHERE id = $1",
            ResourceType::DataCube => "SELECT name FROM data_cubes WHERE id = $1",
            ResourceType::Dashboard => "SELECT name FROM dashboards WHERE id = $1",
        };

        sqlx::query_scalar::<_, String>(query)
            .bind(resource_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to resolve {} '{resource_id}': {error}",
                    resource_type.as_str()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::{DashboardRow, DataCubeRow, DataSourceRow};

    #[test]
    fn data_source_row_decodes() {
        let row = DataSourceRow {
            id: "ds-1".to_owned(),
            name: "Production PostgreSQL".to_owned(),
            kind: "postgresql".to_owned(),
            host: "prod-db.company.com".to_owned(),
            port: 5432,
            database_name: "analytics".to_owned(),
            username: "analytics_user".to_owned(),
            status: "connected".to_owned(),
            last_sync: Some(Utc::now()),
        };

        assert!(row.into_domain().is_ok());
    }

    #[test]
    fn data_source_row_rejects_unknown_kind() {
        let row = DataSourceRow {
            id: "ds-1".to_owned(),
            name: "Production PostgreSQL".to_owned(),
            kind: "oracle".to_owned(),
            host: "prod-db.company.com".to_owned(),
            port: 5432,
            database_name: "analytics".to_owned(),
            username: "analytics_user".to_owned(),
            status: "connected".to_owned(),
            last_sync: None,
        };

        assert!(row.into_domain().is_err());
    }

    #[test]
    fn data_cube_row_decodes_json_columns() {
        let row = DataCubeRow {
            id: "cube-1".to_owned(),
            name: "Sales by Month".to_owned(),
            description: "Monthly sales aggregation".to_owned(),
            query: "SELECT 1".to_owned(),
            data_source_id: "ds-1".to_owned(),
            dimensions: json!(["month"]),
            measures: json!(["total_sales"]),
            created_at: Utc::now(),
        };

        let cube = row.into_domain();
        assert!(cube.is_ok());
        assert_eq!(
            cube.map(|value| value.dimensions().to_vec()).unwrap_or_default(),
            vec!["month".to_owned()]
        );
    }

    #[test]
    fn dashboard_row_decodes_widget_payload() {
        let now = Utc::now();
        let row = DashboardRow {
            id: "dash-1".to_owned(),
            name: "Sales Overview".to_owned(),
            description: "Comprehensive sales metrics and trends".to_owned(),
            data_cube_id: "cube-1".to_owned(),
            widgets: json!([{
                "id": "w-1",
                "type": "metric",
                "title": "Total Sales",
                "config": {"value": 405000, "format": "currency"},
                "x": 0,
                "y": 0,
                "width": 4,
                "height": 2
            }]),
            created_at: now,
            updated_at: now,
        };

        let dashboard = row.into_domain();
        assert!(dashboard.is_ok());
        assert_eq!(
            dashboard.map(|value| value.widgets().len()).unwrap_or(0),
            1
        );
    }
}
