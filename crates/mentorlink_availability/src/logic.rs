// --- File: crates/mentorlink_availability/src/logic.rs ---
use crate::recurrence::{CandidateStarts, RecurrencePattern};
use chrono::{DateTime, NaiveDate, Utc};
use mentorlink_common::services::AvailabilityRule;
use mentorlink_common::MentorlinkError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Storage error: {0}")]
    StorageError(#[from] MentorlinkError),
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Mentor whose bookable slots are requested
    #[cfg_attr(feature = "openapi", schema(example = "mentor-42"))]
    pub mentor_id: String,

    /// Start date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-05"))]
    pub start_date: String,

    /// End date in YYYY-MM-DD format, inclusive. Defaults to the configured
    /// lookahead when omitted.
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-24"))]
    pub end_date: Option<String>,
}

/// One concrete bookable occurrence materialized from a rule.
///
/// Ephemeral: computed on demand for a query window and never persisted.
/// The mixed wire casing (`originalSlotId` next to `start_time`) is the
/// shipped API contract of the calendar frontend and is kept as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExpandedSlot {
    /// The rule this occurrence was generated from.
    #[serde(rename = "originalSlotId")]
    pub original_slot_id: String,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = "date-time", example = "2025-05-15T10:00:00Z")
    )]
    pub start_time: DateTime<Utc>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, format = "date-time", example = "2025-05-15T11:00:00Z")
    )]
    pub end_time: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: i64,
    #[serde(rename = "isRecurring")]
    pub is_recurring: bool,
    #[serde(rename = "recurringPattern")]
    pub recurring_pattern: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExpandedSlotsResponse {
    pub slots: Vec<ExpandedSlot>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct RuleListQuery {
    #[cfg_attr(feature = "openapi", schema(example = "mentor-42"))]
    pub mentor_id: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RulesResponse {
    pub rules: Vec<AvailabilityRule>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateRuleRequest {
    pub mentor_id: String,
    /// Anchor occurrence start, ISO 8601
    pub start_time: String,
    /// Anchor occurrence end, ISO 8601
    pub end_time: String,
    #[serde(default)]
    pub is_recurring: bool,
    /// `daily`, `weekly` or `monthly`; required when `is_recurring` is set
    pub recurring_pattern: Option<String>,
    /// Last occurrence date in YYYY-MM-DD format, inclusive
    pub recurring_end_date: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteRuleResponse {
    pub success: bool,
    pub message: String,
}

// --- Rule Validation ---

/// Validates a rule-creation request and turns it into a storable record.
///
/// Storage stays the source of truth for rule validity; this check only
/// keeps obviously broken records (inverted times, unknown pattern) from
/// entering through our own API. The expander stays defensive regardless.
pub fn build_rule(request: CreateRuleRequest) -> Result<AvailabilityRule, AvailabilityError> {
    let start_time = parse_rfc3339(&request.start_time)?;
    let end_time = parse_rfc3339(&request.end_time)?;
    if end_time <= start_time {
        return Err(AvailabilityError::ValidationError(
            "end_time must be after start_time".to_string(),
        ));
    }

    if request.is_recurring {
        let pattern = request.recurring_pattern.as_deref().ok_or_else(|| {
            AvailabilityError::ValidationError(
                "recurring_pattern is required for recurring rules".to_string(),
            )
        })?;
        if RecurrencePattern::from_name(pattern).is_none() {
            return Err(AvailabilityError::ValidationError(format!(
                "unknown recurring_pattern: {pattern}"
            )));
        }
    }

    let recurring_end_date = match request.recurring_end_date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AvailabilityError::TimeParseError(format!(
                "invalid recurring_end_date (YYYY-MM-DD): {raw}"
            ))
        })?),
        None => None,
    };

    Ok(AvailabilityRule {
        id: Uuid::new_v4().to_string(),
        mentor_id: request.mentor_id,
        start_time,
        end_time,
        duration_minutes: (end_time - start_time).num_minutes(),
        is_recurring: request.is_recurring,
        recurring_pattern: request.recurring_pattern,
        recurring_end_date,
    })
}

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, AvailabilityError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AvailabilityError::TimeParseError(format!("invalid ISO 8601 time: {raw}")))
}

// --- Expansion Logic ---

/// Materializes the concrete occurrences of `rules` whose start falls in the
/// half-open window `[window_start, window_end)`.
///
/// Pure and deterministic: no I/O, no clock access, no logging. The result
/// is sorted ascending by start time; rules firing at the same instant keep
/// their input order (stable sort), which callers must not rely on. A rule
/// with a missing or unrecognized pattern while `is_recurring` is set
/// contributes nothing — bad stored data never aborts the batch.
pub fn expand_rules(
    rules: &[AvailabilityRule],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<ExpandedSlot> {
    if window_start >= window_end {
        return Vec::new();
    }
    let mut slots = Vec::new();
    for rule in rules {
        collect_rule_instances(rule, window_start, window_end, &mut slots);
    }
    slots.sort_by_key(|slot| slot.start_time);
    slots
}

fn collect_rule_instances(
    rule: &AvailabilityRule,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    out: &mut Vec<ExpandedSlot>,
) {
    if !rule.is_recurring {
        // Single occurrence, passed through verbatim. The end-date bound
        // only applies to recurring rules.
        if rule.start_time >= window_start && rule.start_time < window_end {
            out.push(ExpandedSlot {
                original_slot_id: rule.id.clone(),
                start_time: rule.start_time,
                end_time: rule.end_time,
                duration_minutes: rule.duration_minutes,
                is_recurring: rule.is_recurring,
                recurring_pattern: rule.recurring_pattern.clone(),
            });
        }
        return;
    }

    let Some(pattern) = rule
        .recurring_pattern
        .as_deref()
        .and_then(RecurrencePattern::from_name)
    else {
        return;
    };

    let slot_length = rule.end_time - rule.start_time;
    for start in CandidateStarts::new(pattern, rule.start_time, window_start) {
        // Candidates are strictly increasing, so both bounds are final.
        if start >= window_end {
            break;
        }
        if let Some(end_date) = rule.recurring_end_date {
            if start.date_naive() > end_date {
                break;
            }
        }
        if start < window_start {
            continue;
        }
        let Some(end) = start.checked_add_signed(slot_length) else {
            break;
        };
        out.push(ExpandedSlot {
            original_slot_id: rule.id.clone(),
            start_time: start,
            end_time: end,
            duration_minutes: rule.duration_minutes,
            is_recurring: rule.is_recurring,
            recurring_pattern: rule.recurring_pattern.clone(),
        });
    }
}
