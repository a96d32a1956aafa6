use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the caller's entitlement review listing.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/entitled-resource-response.ts"
)]
pub struct EntitledResourceResponse {
    pub resource_type: String,
    pub resource_id: String,
    pub resource_name: String,
    pub permissions: Vec<String>,
    pub granted_at: String,
}

/// Full grant record returned by the administration surface.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/entitlement-response.ts"
)]
pub struct EntitlementResponse {
    pub id: String,
    pub user_id: String,
    pub resource_type: String,
    pub resource_id: String,
    pub permissions: Vec<String>,
    pub granted_at: String,
    pub granted_by: String,
}

/// Request payload for creating a grant.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../packages/api-types/src/generated/create-entitlement-request.ts"
)]
pub struct CreateEntitlementRequest {
    pub user_id: String,
    pub resource_type: String,
    pub resource_id: String,
    pub permissions: Vec<String>,
}
