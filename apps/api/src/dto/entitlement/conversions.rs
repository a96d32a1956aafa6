use std::str::FromStr;

use lumina_application::GrantAccessInput;
use lumina_core::AppError;
use lumina_domain::{DataEntitlement, EntitledResource, Permission, ResourceType};

use super::types::{CreateEntitlementRequest, EntitledResourceResponse, EntitlementResponse};

impl From<EntitledResource> for EntitledResourceResponse {
    fn from(view: EntitledResource) -> Self {
        Self {
            resource_type: view.resource_type.as_str().to_owned(),
            resource_id: view.resource_id,
            resource_name: view.resource_name,
            permissions: view
                .permissions
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
            granted_at: view.granted_at.to_rfc3339(),
        }
    }
}

impl From<DataEntitlement> for EntitlementResponse {
    fn from(grant: DataEntitlement) -> Self {
        Self {
            id: grant.id().to_owned(),
            user_id: grant.user_id().to_owned(),
            resource_type: grant.resource_type().as_str().to_owned(),
            resource_id: grant.resource_id().to_owned(),
            permissions: grant
                .permissions()
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
            granted_at: grant.granted_at().to_rfc3339(),
            granted_by: grant.granted_by().to_owned(),
        }
    }
}

impl TryFrom<CreateEntitlementRequest> for GrantAccessInput {
    type Error = AppError;

    fn try_from(request: CreateEntitlementRequest) -> Result<Self, Self::Error> {
        let resource_type = ResourceType::from_str(request.resource_type.as_str())?;
        let permissions = request
            .permissions
            .iter()
            .map(|value| Permission::from_str(value.as_str()))
            .collect::<Result<Vec<Permission>, AppError>>()?;

        Ok(Self {
            user_id: request.user_id,
            resource_type,
            resource_id: request.resource_id,
            permissions,
        })
    }
}
