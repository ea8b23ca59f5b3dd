// --- File: crates/mentorlink_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    external_service_error, internal_error, not_found, storage_error, validation_error, Context,
    HttpStatusCode, MentorlinkError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_result};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

#[cfg(feature = "booking")]
pub use features::is_booking_enabled;

#[cfg(feature = "notifications")]
pub use features::is_notifications_enabled;
