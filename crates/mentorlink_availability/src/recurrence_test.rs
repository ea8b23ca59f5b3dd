#[cfg(test)]
mod tests {
    use crate::recurrence::{CandidateStarts, RecurrencePattern, MAX_OCCURRENCES_PER_RULE};
    use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn pattern_names_parse_case_insensitively() {
        assert_eq!(
            RecurrencePattern::from_name("daily"),
            Some(RecurrencePattern::Daily)
        );
        assert_eq!(
            RecurrencePattern::from_name("Weekly"),
            Some(RecurrencePattern::Weekly)
        );
        assert_eq!(
            RecurrencePattern::from_name(" MONTHLY "),
            Some(RecurrencePattern::Monthly)
        );
    }

    #[test]
    fn unrecognized_pattern_names_are_rejected() {
        assert_eq!(RecurrencePattern::from_name("hourly"), None);
        assert_eq!(RecurrencePattern::from_name("bi-weekly"), None);
        assert_eq!(RecurrencePattern::from_name(""), None);
    }

    #[test]
    fn daily_walk_starts_at_the_window_day_not_the_anchor() {
        let anchor = utc(2024, 1, 1, 9, 30);
        let window_start = utc(2024, 3, 1, 0, 0);

        let first = CandidateStarts::new(RecurrencePattern::Daily, anchor, window_start)
            .next()
            .unwrap();

        assert_eq!(first.date_naive(), window_start.date_naive());
        assert_eq!(first.hour(), 9);
        assert_eq!(first.minute(), 30);
    }

    #[test]
    fn daily_walk_starts_at_the_anchor_when_the_window_is_earlier() {
        let anchor = utc(2024, 3, 10, 14, 0);
        let window_start = utc(2024, 3, 1, 0, 0);

        let first = CandidateStarts::new(RecurrencePattern::Daily, anchor, window_start)
            .next()
            .unwrap();

        assert_eq!(first, anchor);
    }

    #[test]
    fn weekly_candidates_keep_the_anchor_weekday() {
        let anchor = utc(2024, 1, 3, 14, 0); // a Wednesday
        assert_eq!(anchor.weekday(), Weekday::Wed);
        let window_start = utc(2024, 2, 15, 0, 0);

        let candidates: Vec<_> =
            CandidateStarts::new(RecurrencePattern::Weekly, anchor, window_start)
                .take(6)
                .collect();

        for candidate in &candidates {
            assert_eq!(candidate.weekday(), Weekday::Wed);
            assert_eq!(candidate.hour(), 14);
        }
        // the fast-forward lands within one week of the window start
        assert!(candidates[1] >= window_start);
    }

    #[test]
    fn monthly_candidates_clamp_to_short_months() {
        let anchor = utc(2024, 1, 31, 10, 0);

        let candidates: Vec<_> =
            CandidateStarts::new(RecurrencePattern::Monthly, anchor, anchor)
                .take(4)
                .collect();

        assert_eq!(candidates[0].date_naive(), anchor.date_naive());
        // 2024 is a leap year
        assert_eq!(candidates[1].date_naive(), utc(2024, 2, 29, 0, 0).date_naive());
        assert_eq!(candidates[2].date_naive(), utc(2024, 3, 31, 0, 0).date_naive());
        assert_eq!(candidates[3].date_naive(), utc(2024, 4, 30, 0, 0).date_naive());
    }

    #[test]
    fn monthly_clamp_does_not_corrupt_later_months() {
        // Feb gets clamped to the 29th; March must still be the 31st.
        let anchor = utc(2024, 1, 31, 10, 0);
        let window_start = utc(2024, 3, 1, 0, 0);

        let first_in_march = CandidateStarts::new(RecurrencePattern::Monthly, anchor, window_start)
            .find(|candidate| *candidate >= window_start)
            .unwrap();

        assert_eq!(first_in_march.date_naive(), utc(2024, 3, 31, 0, 0).date_naive());
    }

    #[test]
    fn candidates_are_strictly_increasing() {
        let anchor = utc(2024, 1, 31, 8, 0);
        for pattern in [
            RecurrencePattern::Daily,
            RecurrencePattern::Weekly,
            RecurrencePattern::Monthly,
        ] {
            let candidates: Vec<_> =
                CandidateStarts::new(pattern, anchor, anchor).take(24).collect();
            for pair in candidates.windows(2) {
                assert!(pair[0] < pair[1], "{pattern:?} produced a non-increasing step");
            }
        }
    }

    #[test]
    fn candidate_sequences_are_restartable() {
        let anchor = utc(2024, 1, 3, 14, 0);
        let window_start = utc(2024, 2, 1, 0, 0);

        let first: Vec<_> =
            CandidateStarts::new(RecurrencePattern::Weekly, anchor, window_start)
                .take(10)
                .collect();
        let second: Vec<_> =
            CandidateStarts::new(RecurrencePattern::Weekly, anchor, window_start)
                .take(10)
                .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn candidate_sequences_are_finite() {
        let anchor = utc(2024, 1, 1, 9, 0);
        let count = CandidateStarts::new(RecurrencePattern::Daily, anchor, anchor).count();
        assert_eq!(count, MAX_OCCURRENCES_PER_RULE);
    }
}
