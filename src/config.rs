use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Full connection string; takes precedence over the individual parts
    pub url: Option<String>,
    pub max_connections: u32,
    /// Keep everything in process memory instead of connecting to PostgreSQL
    pub in_memory: bool,
}

/// Read at startup but not enforced on any route yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            password: "password".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            name: "family_tree".to_string(),
            url: None,
            max_connections: 20,
            in_memory: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "secret".to_string(),
        }
    }
}

/// Plain environment variables mapped onto config keys.
/// These win over the config file and the `FAMILY_TREE__` prefixed variables.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DB_USER", "database.user"),
    ("DB_PASS", "database.password"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_NAME", "database.name"),
    ("DATABASE_URL", "database.url"),
    ("JWT_SECRET", "auth.jwt_secret"),
    ("PORT", "server.port"),
];

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and the environment
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // e.g. FAMILY_TREE__DATABASE__MAX_CONNECTIONS=5
        config = config.add_source(
            config::Environment::with_prefix("FAMILY_TREE")
                .prefix_separator("__")
                .separator("__"),
        );

        for (var, key) in ENV_OVERRIDES {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            config = config.set_override_option(*key, value)?;
        }

        let app_config: AppConfig = config.build()?.try_deserialize()?;
        Ok(app_config)
    }

    /// Get the database URL, composing it from the individual settings unless one is given
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database.url {
            return url.clone();
        }

        let db = &self.database;
        format!(
            "postgres://{}:{}@{}:{}/{}",
            db.user, db.password, db.host, db.port, db.name
        )
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
