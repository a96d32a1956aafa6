mod conversions;
mod types;

pub use types::{CreateEntitlementRequest, EntitledResourceResponse, EntitlementResponse};
