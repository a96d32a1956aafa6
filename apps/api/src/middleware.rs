use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use lumina_core::{AppError, RequestIdentity};

use crate::error::ApiResult;
use crate::state::AppState;

/// Header carrying the caller's trusted user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the request identity and threads it through as an extension.
///
/// The id comes from the `x-user-id` header; absent that, from the
/// configured fallback identity. Without either, the request is rejected
/// before reaching a handler.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header_user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);

    let user_id = header_user_id
        .or_else(|| state.default_user_id.clone())
        .ok_or_else(|| AppError::Unauthorized("request identity required".to_owned()))?;

    request.extensions_mut().insert(RequestIdentity::new(user_id));
    Ok(next.run(request).await)
}
