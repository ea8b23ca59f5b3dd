// --- File: crates/mentorlink_booking/src/logic.rs ---

use chrono::{DateTime, Utc};
use mentorlink_availability::logic::expand_rules;
use mentorlink_common::services::{
    AvailabilityRepository, BoxedError, CalendarEvent, CalendarEventResult, CalendarService,
    NotificationService,
};
use mentorlink_common::MentorlinkError;
use mentorlink_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Requested time slot is not part of the mentor's availability.")]
    SlotUnavailable,
    #[error("Availability lookup failed: {0}")]
    StorageError(#[from] MentorlinkError),
    #[error("Calendar interaction failed: {0}")]
    CalendarError(String),
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSessionRequest {
    #[cfg_attr(feature = "openapi", schema(example = "mentor-42"))]
    pub mentor_id: String,
    /// Slot start, ISO 8601. Must equal a slot the mentor offers.
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-15T10:00:00Z"))]
    pub start_time: String,
    /// Slot end, ISO 8601.
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-15T11:00:00Z"))]
    pub end_time: String,
    /// Event title
    pub summary: String,
    pub description: Option<String>,
    /// Confirmation email recipient
    pub player_email: Option<String>,
    /// Reference into the payment gateway, carried for reconciliation
    pub payment_reference: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSessionResponse {
    pub success: bool,
    pub event_id: Option<String>,
    #[cfg_attr(
        feature = "openapi",
        schema(example = "mentorlink-room-123e4567-e89b-12d3-a456-426614174000")
    )]
    pub room_name: String,
    pub message: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct CancelSessionRequest {
    pub notify_attendees: Option<bool>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct CancellationResponse {
    pub success: bool,
    pub message: String,
}

/// Books a mentoring session.
///
/// The requested slot must equal one of the concrete instances expanded from
/// the mentor's availability rules; checking against already-booked events is
/// the calendar backend's concern, not ours. Event creation goes through the
/// calendar seam; the confirmation email is best-effort and never fails the
/// booking.
pub async fn book_session_logic(
    app_config: Arc<AppConfig>,
    repository: Arc<dyn AvailabilityRepository<Error = MentorlinkError>>,
    calendar: Arc<dyn CalendarService<Error = BoxedError>>,
    notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
    request: BookSessionRequest,
) -> Result<BookSessionResponse, BookingError> {
    let booking_config = app_config
        .booking
        .as_ref()
        .ok_or_else(|| BookingError::ConfigError("Booking configuration missing.".to_string()))?;
    let calendar_id = booking_config
        .calendar_id
        .as_ref()
        .ok_or_else(|| BookingError::ConfigError("Booking calendar_id missing.".to_string()))?;

    let slot_start = parse_rfc3339(&request.start_time)?;
    let slot_end = parse_rfc3339(&request.end_time)?;
    if slot_end <= slot_start {
        return Err(BookingError::ValidationError(
            "end_time must be after start_time".to_string(),
        ));
    }

    // The requested slot must be one the mentor actually offers.
    let rules = repository.list_rules(&request.mentor_id).await?;
    let offered = expand_rules(&rules, slot_start, slot_end);
    let is_offered = offered
        .iter()
        .any(|slot| slot.start_time == slot_start && slot.end_time == slot_end);
    if !is_offered {
        return Err(BookingError::SlotUnavailable);
    }

    let room_name = format!("mentorlink-room-{}", Uuid::new_v4());
    let event = CalendarEvent {
        start_time: slot_start.to_rfc3339(),
        end_time: slot_end.to_rfc3339(),
        summary: request.summary.clone(),
        description: request.description.clone(),
        payment_reference: request.payment_reference.clone(),
        room_name: Some(room_name.clone()),
    };

    let created = calendar
        .create_event(calendar_id, event)
        .await
        .map_err(|e| BookingError::CalendarError(e.to_string()))?;
    info!(
        "Booked session {:?} for mentor {}",
        created.event_id, request.mentor_id
    );

    if let (Some(notifier), Some(player_email)) = (notifier, request.player_email.as_deref()) {
        let body = format!(
            "Your session \"{}\" is confirmed from {} to {}. Join via room {}.",
            request.summary,
            slot_start.to_rfc3339(),
            slot_end.to_rfc3339(),
            room_name
        );
        if let Err(e) = notifier
            .send_email(player_email, "Your mentoring session is confirmed", &body, false)
            .await
        {
            warn!("Failed to send confirmation email: {}", e);
        }
    }

    Ok(BookSessionResponse {
        success: true,
        event_id: created.event_id,
        room_name,
        message: "Session booked successfully.".to_string(),
    })
}

/// Deletes a session event from the calendar completely.
pub async fn delete_session_logic(
    calendar: Arc<dyn CalendarService<Error = BoxedError>>,
    calendar_id: &str,
    event_id: &str,
    notify_attendees: bool,
) -> Result<(), BookingError> {
    calendar
        .delete_event(calendar_id, event_id, notify_attendees)
        .await
        .map_err(|e| BookingError::CalendarError(e.to_string()))
}

/// Marks a session event as cancelled without deleting it.
pub async fn mark_session_cancelled_logic(
    calendar: Arc<dyn CalendarService<Error = BoxedError>>,
    calendar_id: &str,
    event_id: &str,
    notify_attendees: bool,
) -> Result<CalendarEventResult, BookingError> {
    calendar
        .mark_event_cancelled(calendar_id, event_id, notify_attendees)
        .await
        .map_err(|e| BookingError::CalendarError(e.to_string()))
}

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, BookingError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BookingError::TimeParseError(format!("invalid ISO 8601 time: {raw}")))
}
