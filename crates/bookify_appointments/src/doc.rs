// --- File: crates/bookify_appointments/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use crate::model::{Appointment, AppointmentRequest};

#[utoipa::path(
    post,
    path = "/appointments",
    request_body(content = AppointmentRequest, example = json!({
        "date": "17-10-2030",
        "time": "10:00",
        "service": "Manicure"
    })),
    responses(
        (status = 200, description = "Appointment created, id and owner assigned by the server", body = Appointment),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 422, description = "Malformed or past date, malformed time")
    ),
    security(("bearer_token" = [])),
    tag = "Appointments"
)]
fn doc_create_appointment_handler() {}

#[utoipa::path(
    get,
    path = "/appointments",
    responses(
        (status = 200, description = "All appointments owned by the caller", body = [Appointment]),
        (status = 404, description = "The caller has no appointments")
    ),
    security(("bearer_token" = [])),
    tag = "Appointments"
)]
fn doc_list_appointments_handler() {}

#[utoipa::path(
    put,
    path = "/appointments/{id}",
    params(("id" = u64, Path, description = "Appointment id")),
    request_body = AppointmentRequest,
    responses(
        (status = 200, description = "Appointment updated; id, owner and name preserved", body = Appointment),
        (status = 403, description = "Caller is neither the owner nor an admin"),
        (status = 404, description = "No appointment with this id")
    ),
    security(("bearer_token" = [])),
    tag = "Appointments"
)]
fn doc_update_appointment_handler() {}

#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(("id" = u64, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment permanently removed", body = Appointment),
        (status = 403, description = "Caller is neither the owner nor an admin"),
        (status = 404, description = "No appointment with this id")
    ),
    security(("bearer_token" = [])),
    tag = "Appointments"
)]
fn doc_delete_appointment_handler() {}

/// OpenAPI documentation for the owner-facing appointment API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_appointment_handler,
        doc_list_appointments_handler,
        doc_update_appointment_handler,
        doc_delete_appointment_handler
    ),
    components(schemas(Appointment, AppointmentRequest)),
    tags((name = "Appointments", description = "Owner-facing appointment booking endpoints"))
)]
pub struct AppointmentsApiDoc;
