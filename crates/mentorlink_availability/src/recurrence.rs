// --- File: crates/mentorlink_availability/src/recurrence.rs ---
//! Candidate-date generation for recurring availability rules.
//!
//! A recurring rule is anchored at its stored `start_time`; the pattern
//! decides how that anchor repeats. This module only produces the candidate
//! occurrence starts — deciding which candidates fall inside the query
//! window (and before the rule's end date) is the caller's job, see
//! [`crate::logic::expand_rules`].

use chrono::{DateTime, Datelike, Duration, Months, Utc};

/// Upper bound on candidates produced per rule. Safety net against
/// malformed stored rules, not a supported range limit.
pub(crate) const MAX_OCCURRENCES_PER_RULE: usize = 100;

/// How a recurring availability rule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
}

impl RecurrencePattern {
    /// Tolerant parse of the stored pattern string.
    ///
    /// Storage is the source of truth for validity; a record with an
    /// unrecognized pattern is answered with `None` so the caller can skip
    /// it instead of failing the whole batch.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(RecurrencePattern::Daily),
            "weekly" => Some(RecurrencePattern::Weekly),
            "monthly" => Some(RecurrencePattern::Monthly),
            _ => None,
        }
    }
}

/// Lazy sequence of candidate occurrence starts for one recurring rule.
///
/// Every candidate carries the anchor's time-of-day, and the k-th candidate
/// is always derived from the anchor itself rather than from the previous
/// candidate, so a month-end clamp (Jan 31 -> Feb 28) does not shift the
/// day-of-month of later months. Candidates are strictly increasing and the
/// sequence ends after [`MAX_OCCURRENCES_PER_RULE`] items at the latest.
///
/// Fast-forward on construction:
/// - `Daily` starts the day walk at the query window (or at the anchor,
///   whichever is later), never earlier.
/// - `Weekly` advances from the anchor in whole weeks, keeping the
///   day-of-week, until just before the window start.
/// - `Monthly` advances from the anchor in whole months, keeping the
///   day-of-month (clamped to the target month's length).
///
/// The first candidate may still precede the window start by less than one
/// pattern step; filtering is up to the caller.
#[derive(Debug, Clone)]
pub(crate) struct CandidateStarts {
    pattern: RecurrencePattern,
    anchor: DateTime<Utc>,
    offset: i64,
    emitted: usize,
}

impl CandidateStarts {
    pub(crate) fn new(
        pattern: RecurrencePattern,
        anchor: DateTime<Utc>,
        window_start: DateTime<Utc>,
    ) -> Self {
        let offset = match pattern {
            RecurrencePattern::Daily => (window_start.date_naive() - anchor.date_naive())
                .num_days()
                .max(0),
            RecurrencePattern::Weekly => (window_start - anchor).num_weeks().max(0),
            RecurrencePattern::Monthly => {
                let months = (i64::from(window_start.year()) - i64::from(anchor.year())) * 12
                    + (i64::from(window_start.month()) - i64::from(anchor.month()));
                // one step back so a day-of-month later than the window
                // start's day is not skipped over
                (months - 1).max(0)
            }
        };
        Self {
            pattern,
            anchor,
            offset,
            emitted: 0,
        }
    }
}

impl Iterator for CandidateStarts {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if self.emitted >= MAX_OCCURRENCES_PER_RULE {
            return None;
        }
        let step = self.offset.checked_add(self.emitted as i64)?;
        let candidate = match self.pattern {
            RecurrencePattern::Daily => self.anchor.checked_add_signed(Duration::try_days(step)?)?,
            RecurrencePattern::Weekly => {
                self.anchor.checked_add_signed(Duration::try_weeks(step)?)?
            }
            RecurrencePattern::Monthly => {
                let months = u32::try_from(step).ok()?;
                self.anchor.checked_add_months(Months::new(months))?
            }
        };
        self.emitted += 1;
        Some(candidate)
    }
}
