use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const THIRTY_DAYS_SECS: i64 = 60 * 60 * 24 * 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Lifetime of a bearer token issued by `/auth/login`.
    pub session_ttl_secs: u64,
    /// Insert the starter product catalogue on an empty database.
    pub seed_products: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("session_ttl_secs", THIRTY_DAYS_SECS)?
            .set_default("seed_products", true)?
            .add_source(Environment::with_prefix("PAGLY").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
