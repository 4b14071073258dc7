use serde::Deserialize;

/// Settings loaded from `config/*.yaml` and `APP__*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Number of Actix worker threads; defaults to the number of CPUs.
    #[serde(default)]
    pub workers: Option<usize>,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Layer `config/default.yaml`, `config/{APP_ENV}.yaml` (optional) and
    /// `APP__*` environment variables, later sources winning.
    pub fn load() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File};

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
