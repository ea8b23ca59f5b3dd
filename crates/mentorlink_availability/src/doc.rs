// File: crates/mentorlink_availability/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AvailabilityQuery, CreateRuleRequest, DeleteRuleResponse, ExpandedSlot,
    ExpandedSlotsResponse, RuleListQuery, RulesResponse,
};
use mentorlink_common::services::AvailabilityRule;

#[utoipa::path(
    get,
    path = "/availability/slots",
    params(
        ("mentor_id" = String, Query, description = "Mentor whose slots are requested", example = "mentor-42"),
        ("start_date" = String, Query, description = "Start date in YYYY-MM-DD format", example = "2025-05-05", format = "date"),
        ("end_date" = Option<String>, Query, description = "End date in YYYY-MM-DD format, inclusive; defaults to the configured lookahead", example = "2025-05-24", format = "date")
    ),
    responses(
        (status = 200, description = "Concrete bookable slots expanded from the mentor's rules", body = ExpandedSlotsResponse,
         example = json!({
             "slots": [
                 {
                     "originalSlotId": "7d5f1c2e-9f7c-4a7e-a2a7-0d3f0c9b5d11",
                     "start_time": "2025-05-15T10:00:00Z",
                     "end_time": "2025-05-15T11:00:00Z",
                     "duration_minutes": 60,
                     "isRecurring": true,
                     "recurringPattern": "weekly"
                 }
             ]
         })
        ),
        (status = 400, description = "Invalid date range",
         example = json!("Invalid start_date format (YYYY-MM-DD)")
        ),
        (status = 500, description = "Storage failure")
    )
)]
fn doc_get_expanded_slots_handler() {}

#[utoipa::path(
    get,
    path = "/availability/rules",
    params(
        ("mentor_id" = String, Query, description = "Mentor whose rules are listed", example = "mentor-42")
    ),
    responses(
        (status = 200, description = "Stored availability rules", body = RulesResponse),
        (status = 500, description = "Storage failure")
    )
)]
fn doc_list_rules_handler() {}

#[utoipa::path(
    post,
    path = "/availability/rules",
    request_body(content = CreateRuleRequest, example = json!({
        "mentor_id": "mentor-42",
        "start_time": "2025-05-07T10:00:00Z",
        "end_time": "2025-05-07T11:00:00Z",
        "is_recurring": true,
        "recurring_pattern": "weekly",
        "recurring_end_date": "2025-08-31"
    })),
    responses(
        (status = 201, description = "Stored rule", body = AvailabilityRule),
        (status = 400, description = "Invalid rule",
         example = json!("Validation error: end_time must be after start_time")
        ),
        (status = 500, description = "Storage failure")
    )
)]
fn doc_create_rule_handler() {}

#[utoipa::path(
    delete,
    path = "/availability/rules/{rule_id}",
    params(
        ("rule_id" = String, Path, description = "The ID of the rule to delete"),
        ("mentor_id" = String, Query, description = "Mentor the rule belongs to", example = "mentor-42")
    ),
    responses(
        (status = 200, description = "Deletion result", body = DeleteRuleResponse,
         example = json!({
             "success": true,
             "message": "Availability rule deleted successfully."
         })
        ),
        (status = 404, description = "Rule not found",
         example = json!("Rule not found.")
        ),
        (status = 500, description = "Storage failure")
    )
)]
fn doc_delete_rule_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_expanded_slots_handler,
        doc_list_rules_handler,
        doc_create_rule_handler,
        doc_delete_rule_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            ExpandedSlot,
            ExpandedSlotsResponse,
            RuleListQuery,
            RulesResponse,
            CreateRuleRequest,
            DeleteRuleResponse,
            AvailabilityRule
        )
    ),
    tags(
        (name = "availability", description = "Mentor availability and slot expansion API")
    ),
    servers(
        (url = "/api", description = "Main API Prefix")
    )
)]
pub struct AvailabilityApiDoc;
