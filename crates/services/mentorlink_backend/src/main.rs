// File: services/mentorlink_backend/src/main.rs
use axum::{routing::get, Router};
use mentorlink_availability::routes as availability_routes;
#[cfg(feature = "booking")]
use mentorlink_booking::routes as booking_routes;
use mentorlink_common::services::ServiceFactory;
use mentorlink_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod service_factory;
use service_factory::MentorlinkServiceFactory;

#[tokio::main]
async fn main() {
    mentorlink_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let service_factory: Arc<dyn ServiceFactory> =
        Arc::new(MentorlinkServiceFactory::new(config.clone()));
    let repository = service_factory
        .availability_repository()
        .expect("availability repository must be available");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Mentorlink API!" }))
        .merge(availability_routes::routes(config.clone(), repository.clone()));
    #[cfg(feature = "booking")]
    let booking_router =
        booking_routes::routes(config.clone(), repository, service_factory.clone());

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = api_router;
        #[cfg(feature = "booking")]
        {
            router = router.merge(booking_router);
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use mentorlink_availability::doc::AvailabilityApiDoc;
        #[cfg(feature = "booking")]
        use mentorlink_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Mentorlink API",
                version = "0.1.0",
                description = "Mentorlink Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Mentorlink", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        // Create the merged OpenAPI document
        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AvailabilityApiDoc::openapi());
        #[cfg(feature = "booking")]
        openapi_doc.merge(BookingApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        // Create the Swagger UI route, referencing the merged doc
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        // Merge the Swagger UI into the main app router
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");

        // Serve static files at a specific path
        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);

        // You can also keep the fallback service for non-matched routes
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
