// File: crates/mentorlink_booking/src/handlers.rs
use crate::logic::{
    book_session_logic, delete_session_logic, mark_session_cancelled_logic, BookSessionRequest,
    BookSessionResponse, BookingError, CancelSessionRequest, CancellationResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use mentorlink_common::is_feature_enabled;
use mentorlink_common::services::{
    AvailabilityRepository, BoxedError, CalendarService, ServiceFactory,
};
use mentorlink_common::{HttpStatusCode, MentorlinkError};
use mentorlink_config::AppConfig;
use std::sync::Arc;
use tracing::info;

// Define shared state needed by booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn AvailabilityRepository<Error = MentorlinkError>>,
    pub service_factory: Arc<dyn ServiceFactory>,
}

impl BookingState {
    /// Runtime gate plus calendar seam lookup, shared by all handlers.
    fn calendar(
        &self,
    ) -> Result<Arc<dyn CalendarService<Error = BoxedError>>, (StatusCode, String)> {
        if !is_feature_enabled(&self.config, self.config.use_booking, self.config.booking.as_ref())
        {
            return Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Booking service is disabled.".to_string(),
            ));
        }
        self.service_factory.calendar_service().ok_or_else(|| {
            info!("Booking requested but no calendar integration is configured.");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Calendar service is not configured.".to_string(),
            )
        })
    }

    fn calendar_id(&self) -> Result<String, (StatusCode, String)> {
        self.config
            .booking
            .as_ref()
            .and_then(|booking| booking.calendar_id.clone())
            .ok_or_else(|| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error: booking calendar ID missing.".to_string(),
                )
            })
    }
}

/// Handler to book a session slot.
#[axum::debug_handler]
pub async fn book_session_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<BookSessionRequest>,
) -> Result<Json<BookSessionResponse>, (StatusCode, String)> {
    let calendar = state.calendar()?;

    let notifier = if is_feature_enabled(
        &state.config,
        state.config.use_notifications,
        state.config.notification.as_ref(),
    ) {
        state.service_factory.notification_service()
    } else {
        None
    };

    book_session_logic(
        state.config.clone(),
        state.repository.clone(),
        calendar,
        notifier,
        payload,
    )
    .await
    .map(Json)
    .map_err(map_booking_error)
}

/// Handler to delete a booked session completely from the calendar.
#[axum::debug_handler]
pub async fn delete_session_handler(
    State(state): State<Arc<BookingState>>,
    axum::extract::Path(event_id): axum::extract::Path<String>,
    Query(params): Query<CancelSessionRequest>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    let calendar = state.calendar()?;
    let calendar_id = state.calendar_id()?;

    // Use notify_attendees parameter if provided, or default to true
    let notify_attendees = params.notify_attendees.unwrap_or(true);

    delete_session_logic(calendar, &calendar_id, &event_id, notify_attendees)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(CancellationResponse {
        success: true,
        message: "Session deleted successfully.".to_string(),
    }))
}

/// Handler to mark a booked session as cancelled without deleting it.
#[axum::debug_handler]
pub async fn mark_session_cancelled_handler(
    State(state): State<Arc<BookingState>>,
    axum::extract::Path(event_id): axum::extract::Path<String>,
    Query(params): Query<CancelSessionRequest>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    let calendar = state.calendar()?;
    let calendar_id = state.calendar_id()?;

    let notify_attendees = params.notify_attendees.unwrap_or(true);

    mark_session_cancelled_logic(calendar, &calendar_id, &event_id, notify_attendees)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(CancellationResponse {
        success: true,
        message: "Session marked as cancelled successfully.".to_string(),
    }))
}

fn map_booking_error(err: BookingError) -> (StatusCode, String) {
    let status = match &err {
        BookingError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        BookingError::TimeParseError(_) | BookingError::ValidationError(_) => {
            StatusCode::BAD_REQUEST
        }
        BookingError::SlotUnavailable => StatusCode::CONFLICT,
        BookingError::StorageError(inner) => StatusCode::from_u16(inner.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        BookingError::CalendarError(_) => StatusCode::BAD_GATEWAY,
    };
    (status, err.to_string())
}
