// --- File: crates/bookify_appointments/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod store;

pub use handlers::AppointmentsState;
pub use routes::routes;
pub use store::AppointmentStore;
