use std::env;

use lumina_core::AppError;

/// Backing storage selected for the grant store and resource catalogs.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory stores, optionally pre-loaded with the demo dataset.
    Memory {
        /// Whether to seed the demo dataset on startup.
        demo_seed: bool,
    },
    /// PostgreSQL-backed stores.
    Postgres {
        /// Connection string for the database.
        database_url: String,
    },
}

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub default_user_id: Option<String>,
    pub storage: StorageConfig,
}

impl ApiConfig {
    /// Loads the configuration from environment variables and process args.
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let storage = match env::var("STORAGE_PROVIDER")
            .unwrap_or_else(|_| "memory".to_owned())
            .as_str()
        {
            "memory" => {
                let demo_seed = env::var("DEMO_SEED")
                    .unwrap_or_else(|_| "true".to_owned())
                    .eq_ignore_ascii_case("true");
                StorageConfig::Memory { demo_seed }
            }
            "postgres" => StorageConfig::Postgres {
                database_url: required_env("DATABASE_URL")?,
            },
            other => {
                return Err(AppError::Validation(format!(
                    "STORAGE_PROVIDER must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        if migrate_only && !matches!(storage, StorageConfig::Postgres { .. }) {
            return Err(AppError::Validation(
                "the migrate command requires STORAGE_PROVIDER=postgres".to_owned(),
            ));
        }

        // Requests without an x-user-id header fall back to this identity.
        // The in-memory demo defaults to the seeded admin; a Postgres
        // deployment rejects anonymous requests unless one is configured.
        let default_user_id = env::var("DEFAULT_USER_ID")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| match storage {
                StorageConfig::Memory { .. } => Some("user-1".to_owned()),
                StorageConfig::Postgres { .. } => None,
            });

        Ok(Self {
            migrate_only,
            api_host,
            api_port,
            frontend_url,
            default_user_id,
            storage,
        })
    }
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}
