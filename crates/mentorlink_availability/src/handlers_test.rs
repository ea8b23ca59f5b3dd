#[cfg(test)]
mod tests {
    use crate::handlers::{
        create_rule_handler, delete_rule_handler, get_expanded_slots_handler, list_rules_handler,
        AvailabilityState,
    };
    use crate::logic::{AvailabilityQuery, CreateRuleRequest, RuleListQuery};
    use crate::service::InMemoryAvailabilityRepository;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::Json;
    use chrono::Datelike;
    use mentorlink_config::{AppConfig, AvailabilityConfig, ServerConfig};
    use std::sync::Arc;

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            use_booking: false,
            use_notifications: false,
            availability: Some(AvailabilityConfig {
                default_lookahead_days: Some(30),
            }),
            booking: None,
            notification: None,
        }
    }

    fn test_state() -> Arc<AvailabilityState> {
        Arc::new(AvailabilityState {
            config: Arc::new(test_config()),
            repository: Arc::new(InMemoryAvailabilityRepository::new()),
        })
    }

    fn weekly_rule_request(mentor_id: &str) -> CreateRuleRequest {
        CreateRuleRequest {
            mentor_id: mentor_id.to_string(),
            start_time: "2025-05-07T10:00:00Z".to_string(), // a Wednesday
            end_time: "2025-05-07T11:00:00Z".to_string(),
            is_recurring: true,
            recurring_pattern: Some("weekly".to_string()),
            recurring_end_date: None,
        }
    }

    #[tokio::test]
    async fn slots_handler_rejects_invalid_start_date() {
        let result = get_expanded_slots_handler(
            State(test_state()),
            Query(AvailabilityQuery {
                mentor_id: "mentor-1".to_string(),
                start_date: "05/05/2025".to_string(),
                end_date: None,
            }),
        )
        .await;

        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn slots_handler_rejects_inverted_date_range() {
        let result = get_expanded_slots_handler(
            State(test_state()),
            Query(AvailabilityQuery {
                mentor_id: "mentor-1".to_string(),
                start_date: "2025-05-24".to_string(),
                end_date: Some("2025-05-05".to_string()),
            }),
        )
        .await;

        let (status, message) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("end_date"));
    }

    #[tokio::test]
    async fn created_rule_shows_up_in_expanded_slots() {
        let state = test_state();

        let (status, Json(created)) = create_rule_handler(
            State(state.clone()),
            Json(weekly_rule_request("mentor-1")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(response) = get_expanded_slots_handler(
            State(state),
            Query(AvailabilityQuery {
                mentor_id: "mentor-1".to_string(),
                start_date: "2025-05-05".to_string(),
                end_date: Some("2025-05-25".to_string()),
            }),
        )
        .await
        .unwrap();

        // Wednesdays May 7, 14 and 21 fall inside the queried range.
        assert_eq!(response.slots.len(), 3);
        for slot in &response.slots {
            assert_eq!(slot.original_slot_id, created.id);
            assert_eq!(slot.start_time.weekday(), chrono::Weekday::Wed);
        }
    }

    #[tokio::test]
    async fn slots_use_configured_lookahead_when_end_date_is_omitted() {
        let state = test_state();

        create_rule_handler(
            State(state.clone()),
            Json(CreateRuleRequest {
                mentor_id: "mentor-1".to_string(),
                start_time: "2025-05-05T09:00:00Z".to_string(),
                end_time: "2025-05-05T09:30:00Z".to_string(),
                is_recurring: true,
                recurring_pattern: Some("daily".to_string()),
                recurring_end_date: None,
            }),
        )
        .await
        .unwrap();

        let Json(response) = get_expanded_slots_handler(
            State(state),
            Query(AvailabilityQuery {
                mentor_id: "mentor-1".to_string(),
                start_date: "2025-05-05".to_string(),
                end_date: None,
            }),
        )
        .await
        .unwrap();

        // one instance per day over the 30-day default lookahead
        assert_eq!(response.slots.len(), 30);
    }

    #[tokio::test]
    async fn create_rule_handler_rejects_invalid_payload() {
        let result = create_rule_handler(
            State(test_state()),
            Json(CreateRuleRequest {
                mentor_id: "mentor-1".to_string(),
                start_time: "2025-05-07T11:00:00Z".to_string(),
                end_time: "2025-05-07T10:00:00Z".to_string(),
                is_recurring: false,
                recurring_pattern: None,
                recurring_end_date: None,
            }),
        )
        .await;

        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rules_can_be_listed_and_deleted() {
        let state = test_state();

        let (_, Json(created)) = create_rule_handler(
            State(state.clone()),
            Json(weekly_rule_request("mentor-1")),
        )
        .await
        .unwrap();

        let Json(listed) = list_rules_handler(
            State(state.clone()),
            Query(RuleListQuery {
                mentor_id: "mentor-1".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(listed.rules.len(), 1);

        let Json(deleted) = delete_rule_handler(
            State(state.clone()),
            Path(created.id.clone()),
            Query(RuleListQuery {
                mentor_id: "mentor-1".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(deleted.success);

        let Json(listed_after) = list_rules_handler(
            State(state),
            Query(RuleListQuery {
                mentor_id: "mentor-1".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(listed_after.rules.is_empty());
    }

    #[tokio::test]
    async fn deleting_a_missing_rule_returns_404() {
        let result = delete_rule_handler(
            State(test_state()),
            Path("no-such-rule".to_string()),
            Query(RuleListQuery {
                mentor_id: "mentor-1".to_string(),
            }),
        )
        .await;

        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
