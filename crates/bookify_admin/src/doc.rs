// --- File: crates/bookify_admin/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use bookify_appointments::model::Appointment;
use bookify_auth::models::PublicUser;

#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All registered accounts", body = [PublicUser]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_token" = [])),
    tag = "Admin"
)]
fn doc_list_users_handler() {}

#[utoipa::path(
    delete,
    path = "/admin/users/{phone}",
    params(("phone" = String, Path, description = "Account identity key")),
    responses(
        (status = 200, description = "Account deleted; all of its appointments removed", body = PublicUser),
        (status = 404, description = "No account for this phone")
    ),
    security(("bearer_token" = [])),
    tag = "Admin"
)]
fn doc_delete_user_handler() {}

#[utoipa::path(
    get,
    path = "/admin/appointments/all",
    responses(
        (status = 200, description = "Every stored appointment", body = [Appointment]),
        (status = 404, description = "No appointments stored")
    ),
    security(("bearer_token" = [])),
    tag = "Admin"
)]
fn doc_all_appointments_handler() {}

#[utoipa::path(
    get,
    path = "/admin/appointments/phone/{phone}",
    params(("phone" = String, Path, description = "Owner phone to query")),
    responses(
        (status = 200, description = "Appointments owned by this phone", body = [Appointment]),
        (status = 404, description = "None found for this phone")
    ),
    security(("bearer_token" = [])),
    tag = "Admin"
)]
fn doc_appointments_by_phone_handler() {}

#[utoipa::path(
    get,
    path = "/admin/appointments/month/{month}",
    params(("month" = u32, Path, description = "Calendar month, 1-12")),
    responses(
        (status = 200, description = "Appointments falling in this calendar month, any year", body = [Appointment]),
        (status = 404, description = "None found for this month")
    ),
    security(("bearer_token" = [])),
    tag = "Admin"
)]
fn doc_appointments_by_month_handler() {}

/// OpenAPI documentation for the admin API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_users_handler,
        doc_delete_user_handler,
        doc_all_appointments_handler,
        doc_appointments_by_phone_handler,
        doc_appointments_by_month_handler
    ),
    components(schemas(PublicUser, Appointment)),
    tags((name = "Admin", description = "Administrative user and appointment endpoints"))
)]
pub struct AdminApiDoc;
