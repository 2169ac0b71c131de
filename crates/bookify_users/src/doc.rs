// --- File: crates/bookify_users/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;

use bookify_auth::models::{LoginForm, PublicUser, RegisterRequest, Token};

#[utoipa::path(
    post,
    path = "/token",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Bearer token issued", body = Token),
        (status = 401, description = "Incorrect phone or password")
    ),
    tag = "Users"
)]
fn doc_login_handler() {}

#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterRequest, example = json!({
        "phone": "1234567890",
        "full_name": "Jane Doe",
        "email": "jane@example.com",
        "password": "secret"
    })),
    responses(
        (status = 200, description = "Account created with role fixed to user", body = PublicUser),
        (status = 400, description = "Phone already registered")
    ),
    tag = "Users"
)]
fn doc_register_handler() {}

#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "The authenticated account, without the password hash", body = PublicUser),
        (status = 400, description = "Account disabled"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_token" = [])),
    tag = "Users"
)]
fn doc_read_me_handler() {}

/// OpenAPI documentation for the user-facing account API
#[derive(OpenApi)]
#[openapi(
    paths(doc_login_handler, doc_register_handler, doc_read_me_handler),
    components(schemas(LoginForm, RegisterRequest, PublicUser, Token)),
    tags((name = "Users", description = "Registration, login and profile endpoints"))
)]
pub struct UsersApiDoc;
