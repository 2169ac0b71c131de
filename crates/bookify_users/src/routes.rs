// --- File: crates/bookify_users/src/routes.rs ---
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use bookify_auth::AuthState;

use crate::handlers::{login_handler, read_me_handler, register_handler, UsersState};

/// Builds the registration/login/profile routes, mounted under `/v1`.
pub fn routes(auth: AuthState) -> Router {
    let state = Arc::new(UsersState { auth });

    Router::new()
        .route("/token", post(login_handler))
        .route("/register", post(register_handler))
        .route("/users/me", get(read_me_handler))
        .with_state(state)
}
