use lumina_application::MarketplaceView;
use lumina_domain::{Dashboard, DashboardWidget, DataCube, DataSource};

use super::types::{
    DashboardResponse, DataCubeResponse, DataSourceResponse, MarketplaceResponse, WidgetResponse,
};

impl From<DataSource> for DataSourceResponse {
    fn from(source: DataSource) -> Self {
        Self {
            id: source.id().to_owned(),
            name: source.name().to_owned(),
            kind: source.kind().as_str().to_owned(),
            host: source.host().to_owned(),
            port: source.port(),
            database: source.database().to_owned(),
            username: source.username().to_owned(),
            status: source.status().as_str().to_owned(),
            last_sync: source.last_sync().map(|value| value.to_rfc3339()),
        }
    }
}

impl From<DataCube> for DataCubeResponse {
    fn from(cube: DataCube) -> Self {
        Self {
            id: cube.id().to_owned(),
            name: cube.name().to_owned(),
            description: cube.description().to_owned(),
            query: cube.query().to_owned(),
            data_source_id: cube.data_source_id().to_owned(),
            dimensions: cube.dimensions().to_vec(),
            measures: cube.measures().to_vec(),
            created_at: cube.created_at().to_rfc3339(),
        }
    }
}

impl From<&DashboardWidget> for WidgetResponse {
    fn from(widget: &DashboardWidget) -> Self {
        Self {
            id: widget.id().to_owned(),
            widget_type: widget.widget_type().as_str().to_owned(),
            title: widget.title().to_owned(),
            config: widget.config().clone(),
            x: widget.x(),
            y: widget.y(),
            width: widget.width(),
            height: widget.height(),
        }
    }
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            id: dashboard.id().to_owned(),
            name: dashboard.name().to_owned(),
            description: dashboard.description().to_owned(),
            data_cube_id: dashboard.data_cube_id().to_owned(),
            widgets: dashboard.widgets().iter().map(WidgetResponse::from).collect(),
            created_at: dashboard.created_at().to_rfc3339(),
            updated_at: dashboard.updated_at().to_rfc3339(),
        }
    }
}

impl From<MarketplaceView> for MarketplaceResponse {
    fn from(view: MarketplaceView) -> Self {
        Self {
            data_sources: view.data_sources.into_iter().map(DataSourceResponse::from).collect(),
            data_cubes: view.data_cubes.into_iter().map(DataCubeResponse::from).collect(),
            dashboards: view.dashboards.into_iter().map(DashboardResponse::from).collect(),
        }
    }
}
