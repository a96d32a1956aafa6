//! Resource entities subject to access control.
//!
//! Connection details, query text and widget layout are carried for the
//! catalog surfaces; entitlement logic only ever looks at `(type, id)`.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lumina_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::security::ResourceType;

/// Uniform view of a catalog entity used by entitlement filtering.
pub trait CatalogResource {
    /// The entitlement resource type of this entity kind.
    const RESOURCE_TYPE: ResourceType;

    /// Returns the id entitlement grants refer to.
    fn resource_id(&self) -> &str;

    /// Returns the name shown in listings and entitlement views.
    fn display_name(&self) -> &str;
}

/// Supported data source engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    /// PostgreSQL.
    Postgresql,
    /// MySQL.
    Mysql,
    /// MongoDB.
    Mongodb,
    /// Snowflake warehouse.
    Snowflake,
    /// Google BigQuery.
    Bigquery,
}

impl DataSourceKind {
    /// Returns a stable storage value for this engine.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
            Self::Snowflake => "snowflake",
            Self::Bigquery => "bigquery",
        }
    }
}

impl FromStr for DataSourceKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "postgresql" => Ok(Self::Postgresql),
            "mysql" => Ok(Self::Mysql),
            "mongodb" => Ok(Self::Mongodb),
            "snowflake" => Ok(Self::Snowflake),
            "bigquery" => Ok(Self::Bigquery),
            _ => Err(AppError::Validation(format!(
                "unknown data source kind '{value}'"
            ))),
        }
    }
}

/// Connectivity state of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Reachable and synced.
    Connected,
    /// Not currently reachable.
    Disconnected,
    /// Last connection attempt failed.
    Error,
}

impl ConnectionStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
        }
    }
}

impl FromStr for ConnectionStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "connected" => Ok(Self::Connected),
            "disconnected" => Ok(Self::Disconnected),
            "error" => Ok(Self::Error),
            _ => Err(AppError::Validation(format!(
                "unknown connection status '{value}'"
            ))),
        }
    }
}

/// A connected database or warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    id: NonEmptyString,
    name: NonEmptyString,
    kind: DataSourceKind,
    host: NonEmptyString,
    port: u16,
    database: NonEmptyString,
    username: NonEmptyString,
    status: ConnectionStatus,
    last_sync: Option<DateTime<Utc>>,
}

impl DataSource {
    /// Creates a validated data source.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: DataSourceKind,
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
        status: ConnectionStatus,
        last_sync: Option<DateTime<Utc>>,
    ) -> AppResult<Self> {
        if port == 0 {
            return Err(AppError::Validation(
                "data source port must be non-zero".to_owned(),
            ));
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            kind,
            host: NonEmptyString::new(host)?,
            port,
            database: NonEmptyString::new(database)?,
            username: NonEmptyString::new(username)?,
            status,
            last_sync,
        })
    }

    /// Returns the stable data source id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the engine kind.
    #[must_use]
    pub fn kind(&self) -> DataSourceKind {
        self.kind
    }

    /// Returns the host name.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the database (or dataset) name.
    #[must_use]
    pub fn database(&self) -> &str {
        self.database.as_str()
    }

    /// Returns the connection username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the connectivity state.
    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Returns the last successful sync time, if any.
    #[must_use]
    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }
}

impl CatalogResource for DataSource {
    const RESOURCE_TYPE: ResourceType = ResourceType::DataSource;

    fn resource_id(&self) -> &str {
        self.id()
    }

    fn display_name(&self) -> &str {
        self.name()
    }
}

/// A saved semantic query with named dimensions and measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCube {
    id: NonEmptyString,
    name: NonEmptyString,
    description: String,
    query: NonEmptyString,
    data_source_id: NonEmptyString,
    dimensions: Vec<String>,
    measures: Vec<String>,
    created_at: DateTime<Utc>,
}

impl DataCube {
    /// Creates a validated data cube.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        query: impl Into<String>,
        data_source_id: impl Into<String>,
        dimensions: Vec<String>,
        measures: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            description: description.into(),
            query: NonEmptyString::new(query)?,
            data_source_id: NonEmptyString::new(data_source_id)?,
            dimensions,
            measures,
            created_at,
        })
    }

    /// Returns the stable cube id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the SQL text the cube evaluates.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Returns the id of the data source the cube runs against.
    #[must_use]
    pub fn data_source_id(&self) -> &str {
        self.data_source_id.as_str()
    }

    /// Returns the dimension column names.
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Returns the measure column names.
    #[must_use]
    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    /// Returns when the cube was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CatalogResource for DataCube {
    const RESOURCE_TYPE: ResourceType = ResourceType::DataCube;

    fn resource_id(&self) -> &str {
        self.id()
    }

    fn display_name(&self) -> &str {
        self.name()
    }
}

/// Supported widget visualizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    /// Line chart.
    Line,
    /// Bar chart.
    Bar,
    /// Pie chart.
    Pie,
    /// Tabular view.
    Table,
    /// Single KPI-style value.
    Metric,
}

impl WidgetType {
    /// Returns a stable storage value for this visualization.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Table => "table",
            Self::Metric => "metric",
        }
    }
}

/// One dashboard grid widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardWidget {
    id: NonEmptyString,
    #[serde(rename = "type")]
    widget_type: WidgetType,
    title: NonEmptyString,
    config: Value,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl DashboardWidget {
    /// Creates a validated dashboard widget.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        widget_type: WidgetType,
        title: impl Into<String>,
        config: Value,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> AppResult<Self> {
        if x < 0 || y < 0 {
            return Err(AppError::Validation(
                "dashboard widget position must be non-negative".to_owned(),
            ));
        }

        if width <= 0 || height <= 0 {
            return Err(AppError::Validation(
                "dashboard widget width and height must be positive".to_owned(),
            ));
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            widget_type,
            title: NonEmptyString::new(title)?,
            config,
            x,
            y,
            width,
            height,
        })
    }

    /// Returns the widget id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the visualization type.
    #[must_use]
    pub fn widget_type(&self) -> WidgetType {
        self.widget_type
    }

    /// Returns the widget title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the visualization-specific configuration.
    #[must_use]
    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Returns the grid column.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns the grid row.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the grid width.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the grid height.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// A widget collection rendered over one data cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    id: NonEmptyString,
    name: NonEmptyString,
    description: String,
    data_cube_id: NonEmptyString,
    widgets: Vec<DashboardWidget>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Dashboard {
    /// Creates a validated dashboard.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        data_cube_id: impl Into<String>,
        widgets: Vec<DashboardWidget>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let mut seen_widget_ids = HashSet::new();
        for widget in &widgets {
            if !seen_widget_ids.insert(widget.id().to_owned()) {
                return Err(AppError::Validation(format!(
                    "duplicate dashboard widget id '{}'",
                    widget.id()
                )));
            }
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            description: description.into(),
            data_cube_id: NonEmptyString::new(data_cube_id)?,
            widgets,
            created_at,
            updated_at,
        })
    }

    /// Returns the stable dashboard id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the id of the data cube the dashboard renders.
    #[must_use]
    pub fn data_cube_id(&self) -> &str {
        self.data_cube_id.as_str()
    }

    /// Returns the dashboard widgets.
    #[must_use]
    pub fn widgets(&self) -> &[DashboardWidget] {
        &self.widgets
    }

    /// Returns when the dashboard was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the dashboard was last updated.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl CatalogResource for Dashboard {
    const RESOURCE_TYPE: ResourceType = ResourceType::Dashboard;

    fn resource_id(&self) -> &str {
        self.id()
    }

    fn display_name(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::{
        ConnectionStatus, Dashboard, DashboardWidget, DataSource, DataSourceKind, WidgetType,
    };

    fn widget(id: &str) -> DashboardWidget {
        DashboardWidget::new(
            id,
            WidgetType::Metric,
            "Total Sales",
            json!({"value": 405000, "format": "currency"}),
            0,
            0,
            4,
            2,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn data_source_rejects_zero_port() {
        let source = DataSource::new(
            "ds-1",
            "Production PostgreSQL",
            DataSourceKind::Postgresql,
            "prod-db.company.com",
            0,
            "analytics",
            "analytics_user",
            ConnectionStatus::Connected,
            None,
        );
        assert!(source.is_err());
    }

    #[test]
    fn widget_rejects_negative_position() {
        let widget = DashboardWidget::new(
            "w-1",
            WidgetType::Line,
            "Sales Trend",
            json!({}),
            -1,
            0,
            8,
            4,
        );
        assert!(widget.is_err());
    }

    #[test]
    fn dashboard_rejects_duplicate_widget_ids() {
        let now = Utc::now();
        let dashboard = Dashboard::new(
            "dash-1",
            "Sales Overview",
            "Comprehensive sales metrics and trends",
            "cube-1",
            vec![widget("w-1"), widget("w-1")],
            now,
            now,
        );
        assert!(dashboard.is_err());
    }

    #[test]
    fn widget_serializes_type_key_for_storage() {
        let serialized = serde_json::to_value(widget("w-1")).unwrap_or_default();
        assert_eq!(
            serialized.get("type").and_then(|value| value.as_str()),
            Some("metric")
        );
    }
}
