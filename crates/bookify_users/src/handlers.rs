// --- File: crates/bookify_users/src/handlers.rs ---
use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Form, Json};
use bookify_auth::guard::{self, AuthState};
use bookify_auth::models::{LoginForm, PublicUser, RegisterRequest, Token};
use bookify_common::ApiError;
use tracing::info;

/// State for user handlers.
#[derive(Clone)]
pub struct UsersState {
    pub auth: AuthState,
}

/// OAuth2 password-flow login: exchanges phone + password for a bearer token.
#[axum::debug_handler]
pub async fn login_handler(
    State(state): State<Arc<UsersState>>,
    Form(form): Form<LoginForm>,
) -> Result<Json<Token>, ApiError> {
    let account = state
        .auth
        .users
        .authenticate(&form.username, &form.password)
        .await
        .ok_or_else(|| ApiError::Unauthenticated("Incorrect phone or password".to_string()))?;

    let access_token = state.auth.tokens.issue(&account.phone)?;
    info!(phone = %account.phone, "token issued");
    Ok(Json(Token {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn register_handler(
    State(state): State<Arc<UsersState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    let account = state.auth.users.register(payload).await?;
    Ok(Json(PublicUser::from(&account)))
}

#[axum::debug_handler]
pub async fn read_me_handler(
    State(state): State<Arc<UsersState>>,
    headers: HeaderMap,
) -> Result<Json<PublicUser>, ApiError> {
    let account = guard::current_active_user(&state.auth, &headers).await?;
    Ok(Json(PublicUser::from(&account)))
}
