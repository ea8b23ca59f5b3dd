// --- File: crates/mentorlink_booking/src/routes.rs ---

use crate::handlers::{
    book_session_handler, delete_session_handler, mark_session_cancelled_handler, BookingState,
};
use axum::{
    routing::{delete, patch, post},
    Router,
};

use mentorlink_common::services::{AvailabilityRepository, ServiceFactory};
use mentorlink_common::MentorlinkError;
use mentorlink_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the booking feature.
///
/// The calendar and notification collaborators come out of the service
/// factory at request time, so a build without those integrations still
/// routes and answers 503.
pub fn routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn AvailabilityRepository<Error = MentorlinkError>>,
    service_factory: Arc<dyn ServiceFactory>,
) -> Router {
    let booking_state = Arc::new(BookingState {
        config,
        repository,
        service_factory,
    });

    Router::new()
        .route("/booking/sessions", post(book_session_handler))
        .route("/booking/sessions/{event_id}", delete(delete_session_handler))
        .route(
            "/booking/sessions/{event_id}/cancel",
            patch(mark_session_cancelled_handler),
        )
        .with_state(booking_state)
}
