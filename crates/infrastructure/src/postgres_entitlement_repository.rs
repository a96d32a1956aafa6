use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lumina_application::EntitlementRepository;
use lumina_core::{AppError, AppResult};
use lumina_domain::{DataEntitlement, Permission, ResourceType};
use sqlx::{FromRow, PgPool};
use tracing::warn;

/// PostgreSQL-backed grant store.
#[derive(Clone)]
pub struct PostgresEntitlementRepository {
    pool: PgPool,
}

impl PostgresEntitlementRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EntitlementRow {
    id: String,
    user_id: String,
    resource_type: String,
    resource_id: String,
    permissions: serde_json::Value,
    granted_at: DateTime<Utc>,
    granted_by: String,
}

/// Decodes one stored row, treating undecodable rows as inert.
///
/// A grant the store should never have produced (unknown type, unknown or
/// empty permissions, blank ids) matches nothing rather than failing every
/// lookup that touches it.
fn decode_grant(row: EntitlementRow) -> Option<DataEntitlement> {
    let resource_type = match ResourceType::from_str(row.resource_type.as_str()) {
        Ok(resource_type) => resource_type,
        Err(error) => {
            warn!(grant_id = %row.id, %error, "skipping grant with unknown resource type");
            return None;
        }
    };

    let names: Vec<String> = match serde_json::from_value(row.permissions) {
        Ok(names) => names,
        Err(error) => {
            warn!(grant_id = %row.id, %error, "skipping grant with undecodable permissions");
            return None;
        }
    };

    let mut permissions = Vec::with_capacity(names.len());
    for name in names {
        match Permission::from_str(name.as_str()) {
            Ok(permission) => permissions.push(permission),
            Err(error) => {
                warn!(grant_id = %row.id, %error, "skipping grant with unknown permission");
                return None;
            }
        }
    }

    match DataEntitlement::new(
        row.id.clone(),
        row.user_id,
        resource_type,
        row.resource_id,
        permissions,
        row.granted_at,
        row.granted_by,
    ) {
        Ok(grant) => Some(grant),
        Err(error) => {
            warn!(grant_id = %row.id, %error, "skipping malformed grant");
            None
        }
    }
}

#[async_trait]
impl EntitlementRepository for PostgresEntitlementRepository {
    async fn list_grants_for_user(&self, user_id: &str) -> AppResult<Vec<DataEntitlement>> {
        let rows = sqlx::query_as::<_, EntitlementRow>(
            r#"
            SELECT id, user_id, resource_type, resource_id, permissions, granted_at, granted_by
            FROM data_entitlements
            WHERE user_id = $1
            ORDER BY granted_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load entitlements: {error}")))?;

        Ok(rows.into_iter().filter_map(decode_grant).collect())
    }

    async fn create_grant(&self, grant: DataEntitlement) -> AppResult<DataEntitlement> {
        let permissions = serde_json::to_value(grant.permissions()).map_err(|error| {
            AppError::Internal(format!("failed to encode grant permissions: {error}"))
        })?;

        sqlx::query(
            r#"
            INSERT INTO data_entitlements
                (id, user_id, resource_type, resource_id, permissions, granted_at, granted_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(grant.id())
        .bind(grant.user_id())
        .bind(grant.resource_type().as_str())
        .bind(grant.resource_id())
        .bind(permissions)
        .bind(grant.granted_at())
        .bind(grant.granted_by())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            if error
                .as_database_error()
                .is_some_and(|database_error| database_error.is_unique_violation())
            {
                AppError::Conflict(format!("entitlement '{}' already exists", grant.id()))
            } else {
                AppError::Internal(format!("failed to store entitlement: {error}"))
            }
        })?;

        Ok(grant)
    }

    async fn delete_grant(&self, grant_id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM data_entitlements WHERE id = $1")
            .bind(grant_id)
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete entitlement: {error}"))
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "entitlement '{grant_id}' does not exist"
            )));
        }

        Ok(())
    }
}
