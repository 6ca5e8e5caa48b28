// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Goal-progress percentages
//!
//! Calories are measured against the daily target over today's records only;
//! minutes and sessions against the weekly targets over the current
//! Monday-start week. Percentages are clamped to [0, 100], and an unset
//! (zero) target yields 0 rather than a division fault.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::start_of_week;
use crate::models::{ActivityRecord, Goals};

/// Percentage completion of each goal target, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Today's calories vs the daily calorie target
    pub calories_pct: f64,
    /// This week's active minutes vs the weekly minutes target
    pub minutes_pct: f64,
    /// This week's session count vs the weekly sessions target
    pub sessions_pct: f64,
}

/// Compare period-scoped sums against the configured targets.
pub fn compute_progress(records: &[ActivityRecord], goals: &Goals, today: NaiveDate) -> GoalProgress {
    let week_start = start_of_week(today);
    let week_end = week_start + Duration::days(6);

    let mut today_calories = 0u64;
    let mut week_minutes = 0u64;
    let mut week_sessions = 0u64;

    for record in records {
        let Some(date) = record.parsed_date() else {
            continue;
        };
        if date == today {
            today_calories += u64::from(record.calories);
        }
        if date >= week_start && date <= week_end {
            week_minutes += u64::from(record.duration_minutes);
            week_sessions += 1;
        }
    }

    GoalProgress {
        calories_pct: percentage(today_calories, goals.daily_calories),
        minutes_pct: percentage(week_minutes, goals.weekly_minutes),
        sessions_pct: percentage(week_sessions, goals.weekly_sessions),
    }
}

pub(crate) fn percentage(actual: u64, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (actual as f64 / f64::from(target) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, calories: u32, minutes: u32) -> ActivityRecord {
        ActivityRecord::new(ActivityType::Run, minutes, calories, d)
    }

    #[test]
    fn test_empty_records_yield_zero() {
        let progress = compute_progress(&[], &Goals::default(), date(2025, 8, 22));
        assert_eq!(progress.calories_pct, 0.0);
        assert_eq!(progress.minutes_pct, 0.0);
        assert_eq!(progress.sessions_pct, 0.0);
    }

    #[test]
    fn test_calories_count_today_only() {
        let today = date(2025, 8, 22);
        let goals = Goals::default(); // 500 kcal daily
        let records = vec![
            record(today, 250, 30),
            record(date(2025, 8, 21), 400, 30), // yesterday, same week
        ];
        let progress = compute_progress(&records, &goals, today);
        assert_eq!(progress.calories_pct, 50.0);
    }

    #[test]
    fn test_weekly_window_is_monday_start() {
        let today = date(2025, 8, 22); // Friday; week is Aug 18..24
        let goals = Goals {
            weekly_minutes: 100,
            weekly_sessions: 4,
            ..Goals::default()
        };
        let records = vec![
            record(date(2025, 8, 18), 0, 30), // Monday, in week
            record(date(2025, 8, 20), 0, 20), // Wednesday, in week
            record(date(2025, 8, 17), 0, 60), // Sunday before, out
        ];
        let progress = compute_progress(&records, &goals, today);
        assert_eq!(progress.minutes_pct, 50.0);
        assert_eq!(progress.sessions_pct, 50.0);
    }

    #[test]
    fn test_percentages_clamped_at_100() {
        let today = date(2025, 8, 22);
        let goals = Goals {
            daily_calories: 100,
            weekly_minutes: 10,
            weekly_sessions: 1,
        };
        let records = vec![record(today, 5000, 500), record(today, 5000, 500)];
        let progress = compute_progress(&records, &goals, today);
        assert_eq!(progress.calories_pct, 100.0);
        assert_eq!(progress.minutes_pct, 100.0);
        assert_eq!(progress.sessions_pct, 100.0);
    }

    #[test]
    fn test_zero_targets_never_divide() {
        let today = date(2025, 8, 22);
        let goals = Goals {
            daily_calories: 0,
            weekly_minutes: 0,
            weekly_sessions: 0,
        };
        let progress = compute_progress(&[record(today, 300, 30)], &goals, today);
        assert_eq!(progress.calories_pct, 0.0);
        assert_eq!(progress.minutes_pct, 0.0);
        assert_eq!(progress.sessions_pct, 0.0);
    }

    #[test]
    fn test_unparseable_dates_skipped() {
        let today = date(2025, 8, 22);
        let mut bad = record(today, 300, 30);
        bad.date = "8/22".to_string();
        let progress = compute_progress(&[bad], &Goals::default(), today);
        assert_eq!(progress.calories_pct, 0.0);
    }
}
