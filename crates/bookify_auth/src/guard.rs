// --- File: crates/bookify_auth/src/guard.rs ---
//! Authorization guard.
//!
//! Every protected handler resolves the caller through one of these
//! predicates. The composition order is fixed: token validity, then account
//! existence, then the disabled flag, then (for admin routes) the role.

use std::sync::Arc;

use axum::http::{header, HeaderMap};
use bookify_common::ApiError;

use crate::models::Account;
use crate::store::UserStore;
use crate::token::TokenService;

/// Shared authentication state handed to every protected route crate.
#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<UserStore>,
    pub tokens: Arc<TokenService>,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(ApiError::invalid_credentials)
}

/// Resolves the bearer token to an existing account.
pub async fn current_user(auth: &AuthState, headers: &HeaderMap) -> Result<Account, ApiError> {
    let token = bearer_token(headers)?;
    let phone = auth.tokens.validate(token)?;
    auth.users
        .get(&phone)
        .await
        .ok_or_else(ApiError::invalid_credentials)
}

/// As [`current_user`], additionally rejecting disabled accounts.
pub async fn current_active_user(
    auth: &AuthState,
    headers: &HeaderMap,
) -> Result<Account, ApiError> {
    let account = current_user(auth, headers).await?;
    if account.disabled {
        return Err(ApiError::AccountDisabled);
    }
    Ok(account)
}

/// As [`current_active_user`], additionally requiring the admin role.
pub async fn current_admin(auth: &AuthState, headers: &HeaderMap) -> Result<Account, ApiError> {
    let account = current_active_user(auth, headers).await?;
    if !account.is_admin() {
        return Err(ApiError::Forbidden("Not enough permissions".to_string()));
    }
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegisterRequest, Role};
    use crate::password;
    use chrono::Duration;

    fn auth_state() -> AuthState {
        AuthState {
            users: Arc::new(UserStore::new()),
            tokens: Arc::new(TokenService::from_minutes("test-secret", 30)),
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        headers
    }

    async fn register(auth: &AuthState, phone: &str) -> Account {
        auth.users
            .register(RegisterRequest {
                phone: phone.to_string(),
                full_name: "Test User".to_string(),
                email: None,
                password: "secret".to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn valid_token_resolves_to_its_account() {
        let auth = auth_state();
        register(&auth, "1234567890").await;
        let token = auth.tokens.issue("1234567890").unwrap();
        let account = current_active_user(&auth, &bearer(&token)).await.unwrap();
        assert_eq!(account.phone, "1234567890");
    }

    #[tokio::test]
    async fn missing_header_is_unauthenticated() {
        let auth = auth_state();
        let err = current_active_user(&auth, &HeaderMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn token_for_unknown_account_is_unauthenticated() {
        let auth = auth_state();
        let token = auth.tokens.issue("9999999999").unwrap();
        let err = current_active_user(&auth, &bearer(&token)).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn expired_token_is_unauthenticated() {
        let auth = auth_state();
        register(&auth, "1234567890").await;
        let token = auth
            .tokens
            .issue_with_ttl("1234567890", Duration::seconds(-10))
            .unwrap();
        let err = current_active_user(&auth, &bearer(&token)).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn disabled_account_is_rejected_after_token_checks() {
        let auth = auth_state();
        auth.users
            .seed(Account {
                phone: "1234567890".to_string(),
                full_name: "Disabled User".to_string(),
                email: None,
                disabled: true,
                role: Role::User,
                hashed_password: password::hash_password("secret").unwrap(),
            })
            .await;
        let token = auth.tokens.issue("1234567890").unwrap();
        let err = current_active_user(&auth, &bearer(&token)).await.unwrap_err();
        assert!(matches!(err, ApiError::AccountDisabled));
    }

    #[tokio::test]
    async fn plain_user_is_forbidden_on_admin_guard() {
        let auth = auth_state();
        register(&auth, "1234567890").await;
        let token = auth.tokens.issue("1234567890").unwrap();
        let err = current_admin(&auth, &bearer(&token)).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admin_passes_the_admin_guard() {
        let auth = auth_state();
        auth.users
            .seed(Account {
                phone: "0000000000".to_string(),
                full_name: "Administrator".to_string(),
                email: None,
                disabled: false,
                role: Role::Admin,
                hashed_password: password::hash_password("admin-pass").unwrap(),
            })
            .await;
        let token = auth.tokens.issue("0000000000").unwrap();
        let account = current_admin(&auth, &bearer(&token)).await.unwrap();
        assert!(account.is_admin());
    }
}
