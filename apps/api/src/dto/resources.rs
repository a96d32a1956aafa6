mod conversions;
mod types;

pub use types::{
    DashboardResponse, DataCubeResponse, DataSourceResponse, MarketplaceResponse, WidgetResponse,
};
