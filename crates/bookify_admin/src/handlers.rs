// --- File: crates/bookify_admin/src/handlers.rs ---
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use bookify_appointments::model::Appointment;
use bookify_appointments::store::AppointmentStore;
use bookify_auth::guard::{self, AuthState};
use bookify_auth::models::PublicUser;
use bookify_common::ApiError;
use tracing::info;

/// State for admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub auth: AuthState,
    pub appointments: Arc<AppointmentStore>,
}

#[axum::debug_handler]
pub async fn list_users_handler(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    guard::current_admin(&state.auth, &headers).await?;
    let users = state
        .auth
        .users
        .list()
        .await
        .iter()
        .map(PublicUser::from)
        .collect();
    Ok(Json(users))
}

/// Deletes an account and cascades over its appointments.
#[axum::debug_handler]
pub async fn delete_user_handler(
    State(state): State<Arc<AdminState>>,
    Path(phone): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PublicUser>, ApiError> {
    guard::current_admin(&state.auth, &headers).await?;

    let account = state
        .auth
        .users
        .remove(&phone)
        .await
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    let removed = state.appointments.remove_for_owner(&phone).await;
    info!(phone = %phone, cascaded = removed, "user deleted by admin");
    Ok(Json(PublicUser::from(&account)))
}

#[axum::debug_handler]
pub async fn all_appointments_handler(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    guard::current_admin(&state.auth, &headers).await?;
    let records = state.appointments.list_all().await?;
    Ok(Json(records))
}

#[axum::debug_handler]
pub async fn appointments_by_phone_handler(
    State(state): State<Arc<AdminState>>,
    Path(phone): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    guard::current_admin(&state.auth, &headers).await?;
    let records = state.appointments.list_by_owner(&phone).await?;
    Ok(Json(records))
}

#[axum::debug_handler]
pub async fn appointments_by_month_handler(
    State(state): State<Arc<AdminState>>,
    Path(month): Path<u32>,
    headers: HeaderMap,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    guard::current_admin(&state.auth, &headers).await?;
    let records = state.appointments.list_by_month(month).await?;
    Ok(Json(records))
}
