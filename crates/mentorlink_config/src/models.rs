// --- File: crates/mentorlink_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Availability Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AvailabilityConfig {
    /// Window applied when an availability query omits `end_date`.
    pub default_lookahead_days: Option<i64>,
}

// --- Booking Config ---
// Holds non-secret booking config. Calendar API credentials are loaded by the
// calendar integration itself, directly from env vars.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BookingConfig {
    /// Calendar the session events are created in.
    pub calendar_id: Option<String>,
}

// --- Notification Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NotificationConfig {
    /// Sender address for confirmation emails.
    pub sender: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_booking: bool,
    #[serde(default)]
    pub use_notifications: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub availability: Option<AvailabilityConfig>,
    #[serde(default)]
    pub booking: Option<BookingConfig>,
    #[serde(default)]
    pub notification: Option<NotificationConfig>,
}
