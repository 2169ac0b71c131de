// --- File: crates/bookify_auth/src/models.rs ---
use serde::{Deserialize, Serialize};

/// Account role. Registration always produces `User`; `Admin` accounts can
/// only be seeded at startup.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Stored account record. Never serialized directly to clients because of
/// the password hash; responses go through [`PublicUser`].
#[derive(Debug, Clone)]
pub struct Account {
    pub phone: String,
    pub full_name: String,
    pub email: Option<String>,
    pub disabled: bool,
    pub role: Role,
    pub hashed_password: String,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Hash-free view of an account, the only account shape that crosses the wire.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub phone: String,
    pub full_name: String,
    pub email: Option<String>,
    pub disabled: bool,
    pub role: Role,
}

impl From<&Account> for PublicUser {
    fn from(account: &Account) -> Self {
        Self {
            phone: account.phone.clone(),
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            disabled: account.disabled,
            role: account.role,
        }
    }
}

/// Registration payload. Note there is no role field: the store fixes the
/// role to `user`, so there is no self-escalation path.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub phone: String,
    pub full_name: String,
    pub email: Option<String>,
    pub password: String,
}

/// OAuth2 password-flow login form. `username` carries the phone number.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}
