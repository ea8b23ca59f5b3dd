//! Feature flag handling for the Mentorlink application.
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `booking`: Enables the session-booking surface
//! - `notifications`: Enables transactional email notifications
//!
//! Feature flags are used in two ways in the Mentorlink application:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! This module provides helper functions for checking if features are enabled
//! at runtime based on configuration values.

use mentorlink_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// A feature counts as enabled when its `use_*` flag is set and its
/// configuration section is present.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the booking feature is enabled at runtime.
#[cfg(feature = "booking")]
pub fn is_booking_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_booking, config.booking.as_ref())
}

/// Check if the notification feature is enabled at runtime.
#[cfg(feature = "notifications")]
pub fn is_notifications_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(
        config,
        config.use_notifications,
        config.notification.as_ref(),
    )
}
