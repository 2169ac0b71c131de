// --- File: crates/bookify_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};

pub mod models;
pub use models::{AppConfig, AuthConfig, BootstrapAdminConfig, ServerConfig};

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. built-in defaults
/// 2. `config/default.toml` (optional)
/// 3. environment variables prefixed with `APP_`, `__`-separated
///    (e.g. `APP_AUTH__SECRET`, `APP_SERVER__PORT`)
///
/// A `.env` file is honored before the environment source is read.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();

    let config = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080_i64)?
        .set_default("auth.token_ttl_minutes", 30_i64)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")
            .unwrap()
            .set_default("server.port", 8080_i64)
            .unwrap()
            .set_default("auth.secret", "test-secret")
            .unwrap()
            .build()
            .unwrap();

        let app: AppConfig = config.try_deserialize().unwrap();
        assert_eq!(app.auth.token_ttl_minutes, 30);
        assert!(app.bootstrap_admin.is_none());
    }
}
