// --- File: crates/services/bookify_backend/src/lib.rs ---
//! Router assembly and state wiring for the Bookify service.
//!
//! Kept in a library so integration tests can drive the exact router the
//! binary serves.

use std::sync::Arc;

use axum::Router;
use bookify_appointments::AppointmentStore;
use bookify_auth::models::{Account, Role};
use bookify_auth::{password, AuthState, TokenService, UserStore};
use bookify_common::ApiError;
use bookify_config::{AppConfig, BootstrapAdminConfig};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Everything the router needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub appointments: Arc<AppointmentStore>,
}

impl AppState {
    /// Builds fresh stores and the token service from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            auth: AuthState {
                users: Arc::new(UserStore::new()),
                tokens: Arc::new(TokenService::from_minutes(
                    &config.auth.secret,
                    config.auth.token_ttl_minutes,
                )),
            },
            appointments: Arc::new(AppointmentStore::new()),
        }
    }

    /// Seeds the configured bootstrap admin. Registration always produces
    /// plain users, so this is the only path that creates an admin account.
    pub async fn seed_admin(&self, admin: &BootstrapAdminConfig) -> Result<(), ApiError> {
        self.auth
            .users
            .seed(Account {
                phone: admin.phone.clone(),
                full_name: admin.full_name.clone(),
                email: admin.email.clone(),
                disabled: false,
                role: Role::Admin,
                hashed_password: password::hash_password(&admin.password)?,
            })
            .await;
        info!(phone = %admin.phone, "bootstrap admin seeded");
        Ok(())
    }
}

/// Assembles the full application router: user and appointment routes under
/// `/v1`, admin routes under `/v1/admin`, request tracing on everything.
pub fn build_router(state: &AppState) -> Router {
    Router::new()
        .nest(
            "/v1",
            bookify_users::routes(state.auth.clone()).merge(bookify_appointments::routes(
                state.auth.clone(),
                state.appointments.clone(),
            )),
        )
        .nest(
            "/v1/admin",
            bookify_admin::routes(state.auth.clone(), state.appointments.clone()),
        )
        .layer(TraceLayer::new_for_http())
}
