use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get};
use lumina_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState) -> Result<Router, AppError> {
    let api_routes = Router::new()
        .route(
            "/api/data-sources",
            get(handlers::resources::list_data_sources_handler),
        )
        .route(
            "/api/data-cubes",
            get(handlers::resources::list_data_cubes_handler),
        )
        .route(
            "/api/dashboards",
            get(handlers::resources::list_dashboards_handler),
        )
        .route(
            "/api/data-marketplace",
            get(handlers::resources::marketplace_handler),
        )
        .route(
            "/api/data-entitlement",
            get(handlers::entitlement::list_entitlements_handler)
                .post(handlers::entitlement::create_entitlement_handler),
        )
        .route(
            "/api/data-entitlement/{entitlement_id}",
            delete(handlers::entitlement::delete_entitlement_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::resolve_identity,
        ));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&app_state.frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            axum::http::HeaderName::from_static(middleware::USER_ID_HEADER),
        ]);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
