//! Principal types: the users entitlements are granted to.

use std::str::FromStr;

use lumina_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Coarse product role of a principal.
///
/// Informational only: authorization decisions derive from grants, not from
/// this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full product administrator.
    Admin,
    /// Builds cubes and dashboards.
    Analyst,
    /// Read-only consumer.
    Viewer,
}

impl UserRole {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Analyst => "analyst",
            Self::Viewer => "viewer",
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "analyst" => Ok(Self::Analyst),
            "viewer" => Ok(Self::Viewer),
            _ => Err(AppError::Validation(format!(
                "unknown user role value '{value}'"
            ))),
        }
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one
    /// `@`, local part and domain are non-empty, domain contains at least one
    /// `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.splitn(2, '@').collect();
        if parts.len() != 2 {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// A known user of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: NonEmptyString,
    email: EmailAddress,
    display_name: NonEmptyString,
    role: UserRole,
}

impl Principal {
    /// Creates a validated principal.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: UserRole,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            email: EmailAddress::new(email)?,
            display_name: NonEmptyString::new(display_name)?,
            role,
        })
    }

    /// Returns the stable user id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the informational product role.
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{EmailAddress, Principal, UserRole};

    #[test]
    fn email_rejects_missing_domain_dot() {
        let result = EmailAddress::new("analyst@example");
        assert!(result.is_err());
    }

    #[test]
    fn email_lowercases_and_trims() {
        let result = EmailAddress::new("  Analyst@Example.COM ");
        assert!(result.is_ok());
        assert_eq!(
            result.map(String::from).unwrap_or_default(),
            "analyst@example.com"
        );
    }

    #[test]
    fn role_roundtrip_storage_value() {
        let restored = UserRole::from_str(UserRole::Analyst.as_str());
        assert!(restored.is_ok());
        assert_eq!(restored.unwrap_or(UserRole::Viewer), UserRole::Analyst);
    }

    #[test]
    fn principal_requires_valid_email() {
        let principal = Principal::new("user-2", "not-an-email", "Analyst User", UserRole::Analyst);
        assert!(principal.is_err());
    }
}
