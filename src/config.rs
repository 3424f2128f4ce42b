use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Connection settings for the school store
///
/// Credentials have no defaults; startup fails if any are missing.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub init_schema: bool,
}

/// Plain environment variables honoured on top of the `SCHOOLS__` ones
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASS", "database.password"),
    ("DB_NAME", "database.name"),
    ("PORT", "server.port"),
];

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration files (config/default.toml, then config/local.toml)
    /// 3. Environment variables prefixed with SCHOOLS_
    ///    e.g., SCHOOLS__SERVER__PORT -> server.port
    /// 4. DB_HOST, DB_PORT, DB_USER, DB_PASS, DB_NAME and PORT
    pub fn load() -> Result<Self, ConfigError> {
        let builder = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env());

        apply_env_overrides(builder, |key| std::env::var(key).ok())?
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("database.port", 5432_i64)?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.min_connections", 1_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("database.idle_timeout_secs", 600_i64)?
        .set_default("database.init_schema", true)
}

fn prefixed_env() -> Environment {
    Environment::with_prefix("SCHOOLS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Layer the plain deployment variables over everything else
fn apply_env_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in ENV_OVERRIDES {
        if let Some(value) = lookup(*var) {
            builder = builder.set_override(*key, value)?;
        }
    }

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn credentials() -> HashMap<&'static str, String> {
        HashMap::from([
            ("DB_HOST", "db.internal".to_string()),
            ("DB_USER", "schools".to_string()),
            ("DB_PASS", "secret".to_string()),
            ("DB_NAME", "school_locator".to_string()),
        ])
    }

    fn build(vars: HashMap<&'static str, String>) -> Result<Settings, ConfigError> {
        apply_env_overrides(defaults()?, |key| vars.get(key).cloned())?
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_port_defaults_to_8080() {
        let settings = build(credentials()).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.database.port, 5432);
        assert!(settings.database.init_schema);
    }

    #[test]
    fn test_plain_variables_override() {
        let mut vars = credentials();
        vars.insert("PORT", "9090".to_string());
        vars.insert("DB_PORT", "6543".to_string());

        let settings = build(vars).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.database.port, 6543);
        assert_eq!(settings.database.host, "db.internal");
        assert_eq!(settings.database.user, "schools");
        assert_eq!(settings.database.password, "secret");
        assert_eq!(settings.database.name, "school_locator");
    }

    #[test]
    fn test_missing_credentials_fail() {
        let mut vars = credentials();
        vars.remove("DB_PASS");
        assert!(build(vars).is_err());
    }
}
