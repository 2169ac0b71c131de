// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Auth Config ---
// The signing secret should be overridden in deployment via APP_AUTH__SECRET.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Process-wide token signing secret. Rotating it invalidates every
    /// outstanding token.
    pub secret: String,
    /// Bearer token lifetime in minutes.
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: u64,
}

pub fn default_token_ttl_minutes() -> u64 {
    30
}

// --- Bootstrap Admin Config ---
// Registration always creates plain users, so the only way to get an admin
// account is to seed one at startup from this section.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BootstrapAdminConfig {
    pub phone: String,
    pub full_name: String,
    pub email: Option<String>,
    // Plaintext here, hashed before it ever reaches the store.
    // Override via APP_BOOTSTRAP_ADMIN__PASSWORD.
    pub password: String,
}

// --- Main Application Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}
