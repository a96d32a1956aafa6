mod common;
mod entitlement;
mod resources;

pub use common::HealthResponse;
pub use entitlement::{CreateEntitlementRequest, EntitledResourceResponse, EntitlementResponse};
pub use resources::{
    DashboardResponse, DataCubeResponse, DataSourceResponse, MarketplaceResponse, WidgetResponse,
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;
    use lumina_domain::{EntitledResource, Permission, ResourceType};

    use super::EntitledResourceResponse;

    #[test]
    fn entitled_resource_serializes_camel_case_wire_keys() {
        let response = EntitledResourceResponse::from(EntitledResource {
            resource_type: ResourceType::DataCube,
            resource_id: "cube-1".to_owned(),
            resource_name: "Sales by Month".to_owned(),
            permissions: BTreeSet::from([Permission::Read, Permission::Write]),
            granted_at: Utc::now(),
        });

        let serialized = serde_json::to_value(response).unwrap_or_default();
        assert_eq!(
            serialized
                .get("resourceType")
                .and_then(|value| value.as_str()),
            Some("dataCube")
        );
        assert_eq!(
            serialized
                .get("permissions")
                .and_then(|value| value.as_array())
                .map(Vec::len),
            Some(2)
        );
        assert!(serialized.get("grantedAt").is_some());
    }
}
