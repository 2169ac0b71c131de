// --- File: crates/bookify_admin/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod routes;

pub use handlers::AdminState;
pub use routes::routes;
