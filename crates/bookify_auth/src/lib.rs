// --- File: crates/bookify_auth/src/lib.rs ---
pub mod guard;
pub mod models;
pub mod password;
pub mod store;
pub mod token;

pub use guard::AuthState;
pub use store::UserStore;
pub use token::TokenService;
