// --- File: crates/mentorlink_availability/src/routes.rs ---

use crate::handlers::{
    create_rule_handler, delete_rule_handler, get_expanded_slots_handler, list_rules_handler,
    AvailabilityState,
};
use axum::{
    routing::{delete, get},
    Router,
};

use mentorlink_common::services::AvailabilityRepository;
use mentorlink_common::MentorlinkError;
use mentorlink_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the availability feature.
///
/// The repository is injected so the backend decides which storage backs
/// the rules (hosted database in production, in-memory store elsewhere).
pub fn routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn AvailabilityRepository<Error = MentorlinkError>>,
) -> Router {
    let availability_state = Arc::new(AvailabilityState { config, repository });

    Router::new()
        .route("/availability/slots", get(get_expanded_slots_handler))
        .route(
            "/availability/rules",
            get(list_rules_handler).post(create_rule_handler),
        )
        .route("/availability/rules/{rule_id}", delete(delete_rule_handler))
        .with_state(availability_state)
}
