// --- File: crates/bookify_appointments/src/handlers.rs ---
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use bookify_auth::guard::{self, AuthState};
use bookify_common::ApiError;

use crate::model::{Appointment, AppointmentRequest};
use crate::store::AppointmentStore;

/// State for appointment handlers.
#[derive(Clone)]
pub struct AppointmentsState {
    pub auth: AuthState,
    pub store: Arc<AppointmentStore>,
}

#[axum::debug_handler]
pub async fn create_appointment_handler(
    State(state): State<Arc<AppointmentsState>>,
    headers: HeaderMap,
    Json(payload): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let user = guard::current_active_user(&state.auth, &headers).await?;
    let record = state.store.create(&user, payload).await?;
    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn list_appointments_handler(
    State(state): State<Arc<AppointmentsState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let user = guard::current_active_user(&state.auth, &headers).await?;
    let records = state.store.list_for_owner(&user.phone).await?;
    Ok(Json(records))
}

#[axum::debug_handler]
pub async fn update_appointment_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(payload): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let user = guard::current_active_user(&state.auth, &headers).await?;
    let record = state.store.update(id, payload, &user).await?;
    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn delete_appointment_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<Appointment>, ApiError> {
    let user = guard::current_active_user(&state.auth, &headers).await?;
    let record = state.store.delete(id, &user).await?;
    Ok(Json(record))
}
