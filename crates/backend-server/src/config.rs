//! Runtime configuration, read from the environment with built-in defaults

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub bind_address: String,
}

impl Config {
    /// Load from `DB_*`, `REDIS_*` and `BIND_ADDRESS` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::default())
    }

    fn load(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_name", "appdb")?
            .set_default("db_user", "postgres")?
            .set_default("db_password", "postgres")?
            .set_default("redis_host", "localhost")?
            .set_default("redis_port", 6379_i64)?
            .set_default("bind_address", "0.0.0.0:5000")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn pg_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .field("redis_host", &self.redis_host)
            .field("redis_port", &self.redis_port)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}
