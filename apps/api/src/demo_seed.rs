use chrono::{DateTime, Utc};
use lumina_application::EntitlementRepository;
use lumina_core::{AppError, AppResult};
use lumina_domain::{
    ConnectionStatus, Dashboard, DashboardWidget, DataCube, DataEntitlement, DataSource,
    DataSourceKind, Permission, Principal, ResourceType, UserRole, WidgetType,
};
use lumina_infrastructure::{InMemoryEntitlementRepository, InMemoryResourceCatalog};
use serde_json::json;
use tracing::info;

/// Loads the demo dataset into the in-memory stores.
///
/// Mirrors the dataset the product demo ships with: three data sources, two
/// cubes, one dashboard, and grants for an admin, an analyst and a viewer.
pub async fn run(
    catalog: &InMemoryResourceCatalog,
    repository: &InMemoryEntitlementRepository,
) -> AppResult<()> {
    let admin = Principal::new("user-1", "admin@example.com", "Admin User", UserRole::Admin)?;
    let analyst = Principal::new(
        "user-2",
        "analyst@example.com",
        "Analyst User",
        UserRole::Analyst,
    )?;
    let viewer = Principal::new(
        "user-3",
        "viewer@example.com",
        "Viewer User",
        UserRole::Viewer,
    )?;

    catalog
        .insert_data_source(DataSource::new(
            "ds-1",
            "Production PostgreSQL",
            DataSourceKind::Postgresql,
            "prod-db.company.com",
            5432,
            "analytics",
            "analytics_user",
            ConnectionStatus::Connected,
            Some(timestamp("2024-01-15T10:30:00Z")?),
        )?)
        .await;
    catalog
        .insert_data_source(DataSource::new(
            "ds-2",
            "Sales MySQL",
            DataSourceKind::Mysql,
            "sales-db.company.com",
            3306,
            "sales",
            "sales_readonly",
            ConnectionStatus::Connected,
            Some(timestamp("2024-01-15T09:15:00Z")?),
        )?)
        .await;
    catalog
        .insert_data_source(DataSource::new(
            "ds-3",
            "Data Warehouse",
            DataSourceKind::Snowflake,
            "company.snowflakecomputing.com",
            443,
            "WAREHOUSE",
            "bi_user",
            ConnectionStatus::Disconnected,
            None,
        )?)
        .await;

    catalog
        .insert_data_cube(DataCube::new(
            "cube-1",
            "Sales by Month",
            "Monthly sales aggregation",
            "SELECT DATE_TRUNC('month', order_date) as month, SUM(total_amount) as total_sales FROM orders GROUP BY month",
            "ds-1",
            vec!["month".to_owned()],
            vec!["total_sales".to_owned()],
            timestamp("2024-01-10T08:00:00Z")?,
        )?)
        .await;
    catalog
        .insert_data_cube(DataCube::new(
            "cube-2",
            "Customer Segmentation",
            "Customers grouped by purchase behavior",
            "SELECT country, COUNT(*) as customer_count, AVG(total_amount) as avg_order_value FROM customers c JOIN orders o ON c.id = o.customer_id GROUP BY country",
            "ds-1",
            vec!["country".to_owned()],
            vec!["customer_count".to_owned(), "avg_order_value".to_owned()],
            timestamp("2024-01-12T14:30:00Z")?,
        )?)
        .await;

    catalog
        .insert_dashboard(Dashboard::new(
            "dash-1",
            "Sales Overview",
            "Comprehensive sales metrics and trends",
            "cube-1",
            vec![
                DashboardWidget::new(
                    "w-1",
                    WidgetType::Metric,
                    "Total Sales",
                    json!({"value": 405000, "format": "currency"}),
                    0,
                    0,
                    4,
                    2,
                )?,
                DashboardWidget::new(
                    "w-2",
                    WidgetType::Line,
                    "Sales Trend",
                    json!({"xAxis": "month", "yAxis": "total_sales"}),
                    4,
                    0,
                    8,
                    4,
                )?,
            ],
            timestamp("2024-01-10T08:00:00Z")?,
            timestamp("2024-01-15T10:00:00Z")?,
        )?)
        .await;

    let grants = [
        DataEntitlement::new(
            "ent-1",
            admin.id(),
            ResourceType::DataSource,
            "ds-1",
            [Permission::Read, Permission::Write, Permission::Delete],
            timestamp("2024-01-05T08:00:00Z")?,
            "system",
        )?,
        DataEntitlement::new(
            "ent-2",
            analyst.id(),
            ResourceType::DataCube,
            "cube-1",
            [Permission::Read, Permission::Write],
            timestamp("2024-01-10T09:00:00Z")?,
            admin.id(),
        )?,
        DataEntitlement::new(
            "ent-3",
            analyst.id(),
            ResourceType::Dashboard,
            "dash-1",
            [Permission::Read, Permission::Write],
            timestamp("2024-01-10T09:00:00Z")?,
            admin.id(),
        )?,
        DataEntitlement::new(
            "ent-4",
            viewer.id(),
            ResourceType::Dashboard,
            "dash-1",
            [Permission::Read],
            timestamp("2024-01-11T12:00:00Z")?,
            admin.id(),
        )?,
    ];

    for grant in grants {
        repository.create_grant(grant).await?;
    }

    info!("demo dataset seeded");
    Ok(())
}

fn timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|error| AppError::Internal(format!("invalid demo timestamp '{value}': {error}")))
}
