// --- File: crates/bookify_users/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod routes;

pub use handlers::UsersState;
pub use routes::routes;
