// --- File: crates/mentorlink_availability/src/service.rs ---
//! In-memory availability-rule repository.
//!
//! Production deployments back the [`AvailabilityRepository`] seam with the
//! hosted database; this implementation keeps the development build and the
//! test suite self-contained behind the same trait.

use mentorlink_common::services::{AvailabilityRepository, AvailabilityRule, BoxFuture};
use mentorlink_common::{storage_error, MentorlinkError};
use std::collections::HashMap;
use std::sync::RwLock;

/// Rule store keyed by mentor id.
#[derive(Default)]
pub struct InMemoryAvailabilityRepository {
    rules: RwLock<HashMap<String, Vec<AvailabilityRule>>>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AvailabilityRepository for InMemoryAvailabilityRepository {
    type Error = MentorlinkError;

    fn list_rules(&self, mentor_id: &str) -> BoxFuture<'_, Vec<AvailabilityRule>, Self::Error> {
        let mentor_id = mentor_id.to_string();
        Box::pin(async move {
            let guard = self.rules.read().map_err(storage_error)?;
            Ok(guard.get(&mentor_id).cloned().unwrap_or_default())
        })
    }

    fn create_rule(
        &self,
        rule: AvailabilityRule,
    ) -> BoxFuture<'_, AvailabilityRule, Self::Error> {
        Box::pin(async move {
            let mut guard = self.rules.write().map_err(storage_error)?;
            guard
                .entry(rule.mentor_id.clone())
                .or_default()
                .push(rule.clone());
            Ok(rule)
        })
    }

    fn delete_rule(&self, mentor_id: &str, rule_id: &str) -> BoxFuture<'_, bool, Self::Error> {
        let mentor_id = mentor_id.to_string();
        let rule_id = rule_id.to_string();
        Box::pin(async move {
            let mut guard = self.rules.write().map_err(storage_error)?;
            let Some(rules) = guard.get_mut(&mentor_id) else {
                return Ok(false);
            };
            let before = rules.len();
            rules.retain(|rule| rule.id != rule_id);
            Ok(rules.len() < before)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_rule(id: &str, mentor_id: &str) -> AvailabilityRule {
        let start = Utc.with_ymd_and_hms(2025, 5, 5, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 5, 5, 10, 0, 0).unwrap();
        AvailabilityRule {
            id: id.to_string(),
            mentor_id: mentor_id.to_string(),
            start_time: start,
            end_time: end,
            duration_minutes: 60,
            is_recurring: false,
            recurring_pattern: None,
            recurring_end_date: None,
        }
    }

    #[tokio::test]
    async fn create_then_list_returns_rule() {
        let repo = InMemoryAvailabilityRepository::new();
        repo.create_rule(sample_rule("r1", "mentor-1")).await.unwrap();

        let rules = repo.list_rules("mentor-1").await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "r1");
    }

    #[tokio::test]
    async fn rules_are_partitioned_by_mentor() {
        let repo = InMemoryAvailabilityRepository::new();
        repo.create_rule(sample_rule("r1", "mentor-1")).await.unwrap();
        repo.create_rule(sample_rule("r2", "mentor-2")).await.unwrap();

        let rules = repo.list_rules("mentor-2").await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "r2");
        assert!(repo.list_rules("mentor-3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_rule() {
        let repo = InMemoryAvailabilityRepository::new();
        repo.create_rule(sample_rule("r1", "mentor-1")).await.unwrap();
        repo.create_rule(sample_rule("r2", "mentor-1")).await.unwrap();

        assert!(repo.delete_rule("mentor-1", "r1").await.unwrap());
        let rules = repo.list_rules("mentor-1").await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "r2");
    }

    #[tokio::test]
    async fn delete_of_missing_rule_reports_false() {
        let repo = InMemoryAvailabilityRepository::new();
        assert!(!repo.delete_rule("mentor-1", "missing").await.unwrap());
    }
}
