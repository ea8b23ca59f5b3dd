// File: crates/mentorlink_availability/src/handlers.rs
use crate::logic::{
    build_rule, expand_rules, AvailabilityQuery, CreateRuleRequest, DeleteRuleResponse,
    ExpandedSlotsResponse, RuleListQuery, RulesResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Days, Duration, NaiveDate, NaiveTime};
use mentorlink_common::services::{AvailabilityRepository, AvailabilityRule};
use mentorlink_common::{HttpStatusCode, MentorlinkError};
use mentorlink_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// Window applied when a query omits `end_date` and no lookahead is
/// configured.
const DEFAULT_LOOKAHEAD_DAYS: i64 = 30;

// Define shared state needed by availability handlers
#[derive(Clone)]
pub struct AvailabilityState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn AvailabilityRepository<Error = MentorlinkError>>,
}

/// Handler to get a mentor's concrete bookable slots.
///
/// Loads the mentor's stored availability rules and expands every recurring
/// pattern into the concrete occurrences inside the queried date range.
/// Cross-referencing against already-booked sessions is the booking layer's
/// job, not this endpoint's.
#[axum::debug_handler]
pub async fn get_expanded_slots_handler(
    State(state): State<Arc<AvailabilityState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ExpandedSlotsResponse>, (StatusCode, String)> {
    // --- Parse Dates & Validate ---
    let start_date = NaiveDate::parse_from_str(&query.start_date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid start_date format (YYYY-MM-DD)".to_string(),
        )
    })?;
    let window_start = start_date.and_time(NaiveTime::MIN).and_utc();

    let window_end = match query.end_date.as_deref() {
        Some(raw) => {
            let end_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid end_date format (YYYY-MM-DD)".to_string(),
                )
            })?;
            if end_date < start_date {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "end_date must be after start_date".to_string(),
                ));
            }
            // end_date is inclusive, the expansion window is half-open
            let exclusive_end = end_date.checked_add_days(Days::new(1)).ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    "end_date out of range".to_string(),
                )
            })?;
            exclusive_end.and_time(NaiveTime::MIN).and_utc()
        }
        None => {
            let lookahead_days = state
                .config
                .availability
                .as_ref()
                .and_then(|availability| availability.default_lookahead_days)
                .unwrap_or(DEFAULT_LOOKAHEAD_DAYS);
            let lookahead = Duration::try_days(lookahead_days)
                .unwrap_or_else(|| Duration::days(DEFAULT_LOOKAHEAD_DAYS));
            window_start.checked_add_signed(lookahead).ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    "start_date out of range".to_string(),
                )
            })?
        }
    };

    let rules = state
        .repository
        .list_rules(&query.mentor_id)
        .await
        .map_err(map_repository_error)?;

    let slots = expand_rules(&rules, window_start, window_end);
    debug!(
        "Expanded {} slots from {} rules for mentor {} ({} - {})",
        slots.len(),
        rules.len(),
        query.mentor_id,
        window_start,
        window_end
    );

    Ok(Json(ExpandedSlotsResponse { slots }))
}

/// Handler to list a mentor's stored availability rules.
#[axum::debug_handler]
pub async fn list_rules_handler(
    State(state): State<Arc<AvailabilityState>>,
    Query(query): Query<RuleListQuery>,
) -> Result<Json<RulesResponse>, (StatusCode, String)> {
    let rules = state
        .repository
        .list_rules(&query.mentor_id)
        .await
        .map_err(map_repository_error)?;
    Ok(Json(RulesResponse { rules }))
}

/// Handler to create a new availability rule.
#[axum::debug_handler]
pub async fn create_rule_handler(
    State(state): State<Arc<AvailabilityState>>,
    Json(payload): Json<CreateRuleRequest>,
) -> Result<(StatusCode, Json<AvailabilityRule>), (StatusCode, String)> {
    let rule = build_rule(payload).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let created = state
        .repository
        .create_rule(rule)
        .await
        .map_err(map_repository_error)?;

    info!(
        "Created availability rule {} for mentor {}",
        created.id, created.mentor_id
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler to delete an availability rule.
#[axum::debug_handler]
pub async fn delete_rule_handler(
    State(state): State<Arc<AvailabilityState>>,
    axum::extract::Path(rule_id): axum::extract::Path<String>,
    Query(query): Query<RuleListQuery>,
) -> Result<Json<DeleteRuleResponse>, (StatusCode, String)> {
    let deleted = state
        .repository
        .delete_rule(&query.mentor_id, &rule_id)
        .await
        .map_err(map_repository_error)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Rule not found.".to_string()));
    }

    info!(
        "Deleted availability rule {} for mentor {}",
        rule_id, query.mentor_id
    );
    Ok(Json(DeleteRuleResponse {
        success: true,
        message: "Availability rule deleted successfully.".to_string(),
    }))
}

fn map_repository_error(err: MentorlinkError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}
