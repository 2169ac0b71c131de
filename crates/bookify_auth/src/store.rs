// --- File: crates/bookify_auth/src/store.rs ---
//! In-memory credential store.
//!
//! State is process-lifetime only and guarded by a single RwLock so that
//! concurrent registrations of the same phone cannot both succeed.

use std::collections::HashMap;

use bookify_common::ApiError;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{Account, RegisterRequest, Role};
use crate::password;

/// Mapping from phone number (the identity key) to account record.
#[derive(Default)]
pub struct UserStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account with the role fixed to `user`.
    ///
    /// The password is hashed before the write lock is taken; the
    /// duplicate-phone check and the insert happen under one guard.
    pub async fn register(&self, req: RegisterRequest) -> Result<Account, ApiError> {
        let hashed_password = password::hash_password(&req.password)?;

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&req.phone) {
            return Err(ApiError::Conflict("Phone already registered".to_string()));
        }
        let account = Account {
            phone: req.phone.clone(),
            full_name: req.full_name,
            email: req.email,
            disabled: false,
            role: Role::User,
            hashed_password,
        };
        accounts.insert(req.phone, account.clone());
        info!(phone = %account.phone, "user registered");
        Ok(account)
    }

    /// Inserts a pre-built account, bypassing the role rules of `register`.
    /// Used to seed the bootstrap admin at startup and in tests.
    pub async fn seed(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.phone.clone(), account);
    }

    pub async fn get(&self, phone: &str) -> Option<Account> {
        self.accounts.read().await.get(phone).cloned()
    }

    /// Looks an account up and checks the password, yielding the account only
    /// when both succeed.
    pub async fn authenticate(&self, phone: &str, plain_password: &str) -> Option<Account> {
        let account = self.get(phone).await?;
        if password::verify_password(plain_password, &account.hashed_password) {
            Some(account)
        } else {
            None
        }
    }

    /// All accounts, ordered by phone for a stable listing.
    pub async fn list(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.read().await.values().cloned().collect();
        accounts.sort_by(|a, b| a.phone.cmp(&b.phone));
        accounts
    }

    /// Removes and returns the account for `phone`, if present.
    pub async fn remove(&self, phone: &str) -> Option<Account> {
        let removed = self.accounts.write().await.remove(phone);
        if let Some(account) = &removed {
            info!(phone = %account.phone, "user removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(phone: &str) -> RegisterRequest {
        RegisterRequest {
            phone: phone.to_string(),
            full_name: "Test User".to_string(),
            email: None,
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn registration_forces_user_role_and_active_state() {
        let store = UserStore::new();
        let account = store.register(request("1234567890")).await.unwrap();
        assert_eq!(account.role, Role::User);
        assert!(!account.disabled);
        assert_ne!(account.hashed_password, "secret");
    }

    #[tokio::test]
    async fn duplicate_phone_conflicts_on_second_attempt() {
        let store = UserStore::new();
        store.register(request("1234567890")).await.unwrap();
        let err = store.register(request("1234567890")).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password_and_unknown_phone() {
        let store = UserStore::new();
        store.register(request("1234567890")).await.unwrap();
        assert!(store.authenticate("1234567890", "secret").await.is_some());
        assert!(store.authenticate("1234567890", "wrong").await.is_none());
        assert!(store.authenticate("0000000000", "secret").await.is_none());
    }

    #[tokio::test]
    async fn remove_returns_the_account_once() {
        let store = UserStore::new();
        store.register(request("1234567890")).await.unwrap();
        assert!(store.remove("1234567890").await.is_some());
        assert!(store.remove("1234567890").await.is_none());
        assert!(store.get("1234567890").await.is_none());
    }
}
