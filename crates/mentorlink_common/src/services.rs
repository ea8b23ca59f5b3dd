// --- File: crates/mentorlink_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the services the marketplace
//! delegates to: rule storage, the calendar/meeting-link API, the payment
//! gateway, and transactional email. The traits allow dependency injection
//! and easier testing by decoupling the application logic from specific
//! implementations of those services.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::MentorlinkError;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A stored availability rule for one mentor.
///
/// Rules are owned and persisted by the hosted database; this is the record
/// shape as it comes out of storage. A rule either describes exactly one
/// bookable occurrence (`is_recurring = false`, `start_time`/`end_time`
/// verbatim) or a repeating pattern anchored at `start_time`/`end_time`.
///
/// `recurring_pattern` is kept as the stored string (`"daily"`, `"weekly"`,
/// `"monthly"`); consumers parse it tolerantly, so a record with an
/// unrecognized pattern simply expands to nothing instead of failing the
/// whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityRule {
    /// Opaque identifier, stable per rule.
    pub id: String,
    /// The mentor this rule belongs to (storage partition key).
    pub mentor_id: String,
    /// Anchor occurrence start.
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = "date-time", example = "2025-05-15T10:00:00Z")
    )]
    pub start_time: DateTime<Utc>,
    /// Anchor occurrence end.
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = "date-time", example = "2025-05-15T11:00:00Z")
    )]
    pub end_time: DateTime<Utc>,
    /// Cached `end_time - start_time` in minutes, carried through to output.
    pub duration_minutes: i64,
    #[serde(default)]
    pub is_recurring: bool,
    /// One of `daily`, `weekly`, `monthly` when `is_recurring` is true.
    #[serde(default)]
    pub recurring_pattern: Option<String>,
    /// Last occurrence date (inclusive). Absent means unbounded.
    #[serde(default)]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = Option<String>, format = "date", example = "2025-08-31")
    )]
    pub recurring_end_date: Option<NaiveDate>,
}

/// A trait for availability-rule storage.
///
/// Production deployments back this with the hosted database; tests and the
/// default development build use the in-memory implementation from the
/// availability crate. The expander itself never touches storage — callers
/// fetch rules through this trait and hand them over.
pub trait AvailabilityRepository: Send + Sync {
    /// Error type returned by repository operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List all availability rules for a mentor.
    fn list_rules(&self, mentor_id: &str) -> BoxFuture<'_, Vec<AvailabilityRule>, Self::Error>;

    /// Persist a new rule.
    fn create_rule(&self, rule: AvailabilityRule)
        -> BoxFuture<'_, AvailabilityRule, Self::Error>;

    /// Delete a rule by id. Returns `false` when no such rule exists.
    fn delete_rule(&self, mentor_id: &str, rule_id: &str) -> BoxFuture<'_, bool, Self::Error>;
}

/// A trait for calendar service operations.
///
/// This trait defines the operations that are delegated to the external
/// calendar/meeting API when a session is booked or cancelled.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a calendar event with a meeting link.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;

    /// Delete a calendar event.
    fn delete_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        notify_attendees: bool,
    ) -> BoxFuture<'_, (), Self::Error>;

    /// Mark a calendar event as cancelled without deleting it.
    fn mark_event_cancelled(
        &self,
        calendar_id: &str,
        event_id: &str,
        notify_attendees: bool,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// A trait for payment service operations.
///
/// The payment gateway is fully external; this seam exists so the booking
/// flow can attach a charge or issue a refund without knowing the provider.
pub trait PaymentService: Send + Sync {
    /// Error type returned by payment service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a payment intent.
    fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
        description: Option<&str>,
    ) -> BoxFuture<'_, PaymentIntentResult, Self::Error>;

    /// Create a refund for a prior payment.
    fn create_refund(
        &self,
        payment_intent_id: &str,
        amount: Option<i64>,
    ) -> BoxFuture<'_, RefundResult, Self::Error>;
}

/// A trait for notification service operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send an email notification.
    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// A factory for creating service instances.
///
/// The backend builds one of these at startup; each accessor returns `None`
/// when the corresponding integration is not compiled in or is disabled via
/// runtime config, and handlers answer 503 in that case.
pub trait ServiceFactory: Send + Sync {
    /// Get a calendar service instance.
    fn calendar_service(&self) -> Option<Arc<dyn CalendarService<Error = BoxedError>>>;

    /// Get a payment service instance.
    fn payment_service(&self) -> Option<Arc<dyn PaymentService<Error = BoxedError>>>;

    /// Get a notification service instance.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>>;

    /// Get the availability-rule repository.
    fn availability_repository(
        &self,
    ) -> Option<Arc<dyn AvailabilityRepository<Error = MentorlinkError>>>;
}

/// Data structures for calendar service operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The start time of the event (ISO 8601).
    pub start_time: String,
    /// The end time of the event (ISO 8601).
    pub end_time: String,
    /// The summary or title of the event.
    pub summary: String,
    /// An optional description of the event.
    pub description: Option<String>,
    // Reference into the payment gateway, carried for reconciliation only.
    #[serde(skip)]
    pub payment_reference: Option<String>,
    #[serde(skip)]
    pub room_name: Option<String>,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// The status of the event.
    pub status: String,
}

/// Data structures for payment service operations.
/// Represents the result of a payment intent operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResult {
    /// The ID of the payment intent.
    pub id: String,
    /// The status of the payment intent.
    pub status: String,
    /// The amount of the payment intent.
    pub amount: i64,
    /// The currency of the payment intent.
    pub currency: String,
}

/// Represents the result of a refund operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundResult {
    /// The ID of the refund.
    pub id: String,
    /// The status of the refund.
    pub status: String,
    /// The amount of the refund.
    pub amount: i64,
}

/// Data structures for notification service operations.
/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The ID of the notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}
