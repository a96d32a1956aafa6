use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// API representation of a connected data source.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/data-source-response.ts"
)]
pub struct DataSourceResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub status: String,
    pub last_sync: Option<String>,
}

/// API representation of a data cube.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/data-cube-response.ts"
)]
pub struct DataCubeResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub query: String,
    pub data_source_id: String,
    pub dimensions: Vec<String>,
    pub measures: Vec<String>,
    pub created_at: String,
}

/// API representation of one dashboard widget.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/widget-response.ts"
)]
pub struct WidgetResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    pub title: String,
    #[ts(type = "Record<string, unknown>")]
    pub config: Value,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// API representation of a dashboard.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/dashboard-response.ts"
)]
pub struct DashboardResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub data_cube_id: String,
    pub widgets: Vec<WidgetResponse>,
    pub created_at: String,
    pub updated_at: String,
}

/// Grouped marketplace listing, filtered for the caller.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/marketplace-response.ts"
)]
pub struct MarketplaceResponse {
    pub data_sources: Vec<DataSourceResponse>,
    pub data_cubes: Vec<DataCubeResponse>,
    pub dashboards: Vec<DashboardResponse>,
}
