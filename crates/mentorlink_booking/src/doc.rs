// File: crates/mentorlink_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    BookSessionRequest, BookSessionResponse, CancelSessionRequest, CancellationResponse,
};

#[utoipa::path(
    post,
    path = "/booking/sessions",
    request_body(content = BookSessionRequest, example = json!({
        "mentor_id": "mentor-42",
        "start_time": "2025-05-15T10:00:00Z",
        "end_time": "2025-05-15T11:00:00Z",
        "summary": "Midfield positioning review",
        "description": "Follow-up on last week's match footage",
        "player_email": "player@example.com"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookSessionResponse,
         example = json!({
             "success": true,
             "event_id": "abc123xyz456",
             "room_name": "mentorlink-room-123e4567-e89b-12d3-a456-426614174000",
             "message": "Session booked successfully."
         })
        ),
        (status = 409, description = "Slot not offered by the mentor",
         example = json!("Requested time slot is not part of the mentor's availability.")
        ),
        (status = 503, description = "Booking disabled or calendar integration missing"),
        (status = 502, description = "Calendar backend failure")
    )
)]
fn doc_book_session_handler() {}

#[utoipa::path(
    delete,
    path = "/booking/sessions/{event_id}",
    params(
        ("event_id" = String, Path, description = "The ID of the session event to delete"),
        ("notify_attendees" = Option<bool>, Query, description = "Whether to send cancellation notifications to attendees")
    ),
    responses(
        (status = 200, description = "Deletion result", body = CancellationResponse,
         example = json!({
             "success": true,
             "message": "Session deleted successfully."
         })
        ),
        (status = 502, description = "Calendar backend failure"),
        (status = 503, description = "Booking disabled or calendar integration missing")
    )
)]
fn doc_delete_session_handler() {}

#[utoipa::path(
    patch,
    path = "/booking/sessions/{event_id}/cancel",
    params(
        ("event_id" = String, Path, description = "The ID of the session event to mark as cancelled"),
        ("notify_attendees" = Option<bool>, Query, description = "Whether to send cancellation notifications to attendees")
    ),
    responses(
        (status = 200, description = "Cancellation result", body = CancellationResponse,
         example = json!({
             "success": true,
             "message": "Session marked as cancelled successfully."
         })
        ),
        (status = 502, description = "Calendar backend failure"),
        (status = 503, description = "Booking disabled or calendar integration missing")
    )
)]
fn doc_mark_session_cancelled_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_book_session_handler,
        doc_delete_session_handler,
        doc_mark_session_cancelled_handler
    ),
    components(
        schemas(
            BookSessionRequest,
            BookSessionResponse,
            CancelSessionRequest,
            CancellationResponse
        )
    ),
    tags(
        (name = "booking", description = "Session booking API")
    ),
    servers(
        (url = "/api", description = "Main API Prefix")
    )
)]
pub struct BookingApiDoc;
