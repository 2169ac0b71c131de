// --- File: crates/bookify_admin/src/routes.rs ---
use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use bookify_appointments::store::AppointmentStore;
use bookify_auth::AuthState;

use crate::handlers::{
    all_appointments_handler, appointments_by_month_handler, appointments_by_phone_handler,
    delete_user_handler, list_users_handler, AdminState,
};

/// Builds the admin routes, mounted under `/v1/admin`.
pub fn routes(auth: AuthState, appointments: Arc<AppointmentStore>) -> Router {
    let state = Arc::new(AdminState {
        auth,
        appointments,
    });

    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/{phone}", delete(delete_user_handler))
        .route("/appointments/all", get(all_appointments_handler))
        .route(
            "/appointments/phone/{phone}",
            get(appointments_by_phone_handler),
        )
        .route(
            "/appointments/month/{month}",
            get(appointments_by_month_handler),
        )
        .with_state(state)
}
