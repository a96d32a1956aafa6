use serde::{Deserialize, Serialize};

/// Identity resolved for one inbound request.
///
/// How the identity is established (header, token, demo fallback) is the
/// caller's concern; the services only ever see the resolved value and never
/// read ambient request state themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIdentity {
    user_id: String,
}

impl RequestIdentity {
    /// Creates an identity from an already-trusted user id.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Returns the stable user id for the current request.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }
}
