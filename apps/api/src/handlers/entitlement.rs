use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use lumina_application::GrantAccessInput;
use lumina_core::RequestIdentity;

use crate::dto::{CreateEntitlementRequest, EntitledResourceResponse, EntitlementResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_entitlements_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<Json<Vec<EntitledResourceResponse>>> {
    let views = state
        .entitlement_service
        .project_for_user(identity.user_id())
        .await?
        .into_iter()
        .map(EntitledResourceResponse::from)
        .collect();

    Ok(Json(views))
}

pub async fn create_entitlement_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(payload): Json<CreateEntitlementRequest>,
) -> ApiResult<(StatusCode, Json<EntitlementResponse>)> {
    let input = GrantAccessInput::try_from(payload)?;
    let created = state
        .entitlement_service
        .grant_access(&identity, input)
        .await?;

    Ok((StatusCode::CREATED, Json(EntitlementResponse::from(created))))
}

pub async fn delete_entitlement_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(entitlement_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .entitlement_service
        .revoke_grant(&identity, entitlement_id.as_str())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
