use axum::Json;
use axum::extract::{Extension, State};
use lumina_core::RequestIdentity;

use crate::dto::{DashboardResponse, DataCubeResponse, DataSourceResponse, MarketplaceResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_data_sources_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<Json<Vec<DataSourceResponse>>> {
    let all = state.resource_catalog.list_data_sources().await?;
    let entitled = state
        .entitlement_service
        .filter_data_sources(all, identity.user_id())
        .await?;

    Ok(Json(entitled.into_iter().map(DataSourceResponse::from).collect()))
}

pub async fn list_data_cubes_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<Json<Vec<DataCubeResponse>>> {
    let all = state.resource_catalog.list_data_cubes().await?;
    let entitled = state
        .entitlement_service
        .filter_data_cubes(all, identity.user_id())
        .await?;

    Ok(Json(entitled.into_iter().map(DataCubeResponse::from).collect()))
}

pub async fn list_dashboards_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<Json<Vec<DashboardResponse>>> {
    let all = state.resource_catalog.list_dashboards().await?;
    let entitled = state
        .entitlement_service
        .filter_dashboards(all, identity.user_id())
        .await?;

    Ok(Json(entitled.into_iter().map(DashboardResponse::from).collect()))
}

pub async fn marketplace_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<Json<MarketplaceResponse>> {
    let view = state
        .marketplace_service
        .browse(identity.user_id())
        .await?;

    Ok(Json(MarketplaceResponse::from(view)))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Extension, State};
    use lumina_core::RequestIdentity;

    use crate::api_services::tests::demo_state;

    use super::{list_data_cubes_handler, list_data_sources_handler, marketplace_handler};

    #[tokio::test]
    async fn analyst_sees_only_granted_cubes() {
        let state = demo_state().await;

        let response = list_data_cubes_handler(
            State(state),
            Extension(RequestIdentity::new("user-2")),
        )
        .await;
        assert!(response.is_ok());

        let cubes = response.map(|json| json.0).unwrap_or_default();
        assert_eq!(cubes.len(), 1);
        assert_eq!(cubes[0].id, "cube-1");
    }

    #[tokio::test]
    async fn administrator_sees_every_data_source() {
        let state = demo_state().await;

        let response = list_data_sources_handler(
            State(state),
            Extension(RequestIdentity::new("user-1")),
        )
        .await;
        assert!(response.is_ok());
        assert_eq!(response.map(|json| json.0.len()).unwrap_or(0), 3);
    }

    #[tokio::test]
    async fn marketplace_groups_filtered_collections() {
        let state = demo_state().await;

        let response = marketplace_handler(
            State(state),
            Extension(RequestIdentity::new("user-3")),
        )
        .await;
        assert!(response.is_ok());

        let view = response.map(|json| json.0);
        assert!(view.is_ok());
        let view = view.unwrap_or_else(|_| unreachable!());
        assert!(view.data_sources.is_empty());
        assert!(view.data_cubes.is_empty());
        assert_eq!(view.dashboards.len(), 1);
    }
}
