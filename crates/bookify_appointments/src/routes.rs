// --- File: crates/bookify_appointments/src/routes.rs ---
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use bookify_auth::AuthState;

use crate::handlers::{
    create_appointment_handler, delete_appointment_handler, list_appointments_handler,
    update_appointment_handler, AppointmentsState,
};
use crate::store::AppointmentStore;

/// Builds the owner-facing appointment routes, mounted under `/v1`.
pub fn routes(auth: AuthState, store: Arc<AppointmentStore>) -> Router {
    let state = Arc::new(AppointmentsState { auth, store });

    Router::new()
        .route(
            "/appointments",
            get(list_appointments_handler).post(create_appointment_handler),
        )
        .route(
            "/appointments/{id}",
            put(update_appointment_handler).delete(delete_appointment_handler),
        )
        .with_state(state)
}
