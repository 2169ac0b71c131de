// --- File: crates/services/bookify_backend/src/main.rs ---
use bookify_backend::{build_router, AppState};
use bookify_config::load_config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    bookify_common::logging::init();

    let config = load_config().expect("Failed to load config");
    let state = AppState::from_config(&config);

    if let Some(admin) = &config.bootstrap_admin {
        state
            .seed_admin(admin)
            .await
            .expect("Failed to seed bootstrap admin");
    }

    #[allow(unused_mut)] // openapi feature appends the Swagger UI routes
    let mut app = build_router(&state);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use bookify_admin::doc::AdminApiDoc;
        use bookify_appointments::doc::AppointmentsApiDoc;
        use bookify_users::doc::UsersApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        struct SecurityAddon;
        impl utoipa::Modify for SecurityAddon {
            fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
                use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
                let components = openapi.components.get_or_insert_with(Default::default);
                components.add_security_scheme(
                    "bearer_token",
                    SecurityScheme::Http(
                        HttpBuilder::new()
                            .scheme(HttpAuthScheme::Bearer)
                            .bearer_format("JWT")
                            .build(),
                    ),
                );
            }
        }

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Bookify API",
                version = "0.1.0",
                description = "Appointment booking service API docs"
            ),
            components(),
            modifiers(&SecurityAddon),
            servers((url = "/v1", description = "Main API prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(UsersApiDoc::openapi());
        openapi_doc.merge(AppointmentsApiDoc::openapi());
        openapi_doc.merge(AdminApiDoc::openapi());

        info!("Adding Swagger UI at /docs");
        app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
