// --- File: crates/services/mentorlink_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait for the
//! backend service. The calendar, payment and email collaborators are hosted
//! integrations that are wired in per deployment; a build without them
//! answers `None`, and the feature handlers respond 503.

use mentorlink_availability::service::InMemoryAvailabilityRepository;
use mentorlink_common::is_feature_enabled;
use mentorlink_common::services::{
    AvailabilityRepository, BoxedError, CalendarService, NotificationService, PaymentService,
    ServiceFactory,
};
use mentorlink_common::MentorlinkError;
use mentorlink_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Service factory implementation.
///
/// Initializes the services available to this build based on the application
/// configuration and makes them available through the trait methods.
pub struct MentorlinkServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    availability_repository: Arc<dyn AvailabilityRepository<Error = MentorlinkError>>,
}

impl MentorlinkServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        if is_feature_enabled(&config, config.use_booking, config.booking.as_ref()) {
            warn!(
                "⚠️ Booking is enabled via runtime config but no calendar integration \
                 is compiled into this build; booking endpoints will answer 503."
            );
        }
        if is_feature_enabled(
            &config,
            config.use_notifications,
            config.notification.as_ref(),
        ) {
            warn!(
                "⚠️ Notifications are enabled via runtime config but no email \
                 integration is compiled into this build."
            );
        }

        info!("ℹ️ Using the in-memory availability store.");
        Self {
            config,
            availability_repository: Arc::new(InMemoryAvailabilityRepository::new()),
        }
    }
}

impl ServiceFactory for MentorlinkServiceFactory {
    fn calendar_service(&self) -> Option<Arc<dyn CalendarService<Error = BoxedError>>> {
        None
    }

    fn payment_service(&self) -> Option<Arc<dyn PaymentService<Error = BoxedError>>> {
        None
    }

    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        None
    }

    fn availability_repository(
        &self,
    ) -> Option<Arc<dyn AvailabilityRepository<Error = MentorlinkError>>> {
        Some(self.availability_repository.clone())
    }
}
