// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Achievement badge catalogue and evaluation
//!
//! Badges are declarative: each catalogue entry pairs display metadata with
//! a [`BadgeRule`] variant, and a single evaluator interprets the rules.
//! Adding a badge means adding a catalogue entry, not touching the
//! evaluator.
//!
//! Earned badges are permanent. Evaluation returns the union of previously
//! earned ids and currently-true rules; an id is never removed even if its
//! rule would no longer hold.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use super::streaks::compute_streaks;
use crate::constants::MONTHLY_SESSIONS_FALLBACK;
use crate::models::{ActivityRecord, ActivityType, Goals};

/// Badge id constants, stable across versions.
pub const CALORIES_1000: &str = "calories1000";
pub const FIRST_10_RUNS: &str = "first10runs";
pub const STREAK_7_DAYS: &str = "streak7days";
pub const MONTHLY_GOAL: &str = "monthlyGoal";

/// Condition under which a badge unlocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeRule {
    /// Lifetime calorie total reaches the threshold
    TotalCalories { threshold: u64 },
    /// Lifetime count of records of one activity type reaches the threshold
    ActivityCount {
        activity_type: ActivityType,
        threshold: u32,
    },
    /// Longest streak in the trailing 30-day window reaches the threshold
    LongestStreak { days: u32 },
    /// Session count in the current calendar month reaches the weekly
    /// session goal, or the fallback when no goal is set
    MonthlySessions { fallback: u32 },
}

/// A badge definition: display metadata plus its unlock rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    /// Stable identifier persisted in the earned set
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Display icon (emoji)
    pub icon: &'static str,
    /// Unlock condition
    pub rule: BadgeRule,
}

/// The canonical badge catalogue.
pub fn badge_catalogue() -> Vec<BadgeSpec> {
    vec![
        BadgeSpec {
            id: CALORIES_1000,
            label: "1000 Calories Burned",
            icon: "🔥",
            rule: BadgeRule::TotalCalories { threshold: 1000 },
        },
        BadgeSpec {
            id: FIRST_10_RUNS,
            label: "First 10 Runs",
            icon: "🏃",
            rule: BadgeRule::ActivityCount {
                activity_type: ActivityType::Run,
                threshold: 10,
            },
        },
        BadgeSpec {
            id: STREAK_7_DAYS,
            label: "7-Day Streak",
            icon: "📅",
            rule: BadgeRule::LongestStreak { days: 7 },
        },
        BadgeSpec {
            id: MONTHLY_GOAL,
            label: "Monthly Goal Reached",
            icon: "🏆",
            rule: BadgeRule::MonthlySessions {
                fallback: MONTHLY_SESSIONS_FALLBACK,
            },
        },
    ]
}

/// Evaluate every catalogue rule and merge with the previously earned set.
///
/// The result is always a superset of `previously_earned`.
pub fn evaluate_badges(
    records: &[ActivityRecord],
    goals: &Goals,
    previously_earned: &BTreeSet<String>,
    today: NaiveDate,
) -> BTreeSet<String> {
    let mut earned = previously_earned.clone();
    for spec in badge_catalogue() {
        if rule_met(&spec.rule, records, goals, today) {
            earned.insert(spec.id.to_string());
        }
    }
    earned
}

fn rule_met(rule: &BadgeRule, records: &[ActivityRecord], goals: &Goals, today: NaiveDate) -> bool {
    match rule {
        BadgeRule::TotalCalories { threshold } => {
            let total: u64 = records.iter().map(|r| u64::from(r.calories)).sum();
            total >= *threshold
        }
        BadgeRule::ActivityCount {
            activity_type,
            threshold,
        } => {
            let count = records
                .iter()
                .filter(|r| r.activity_type == *activity_type)
                .count();
            count >= *threshold as usize
        }
        BadgeRule::LongestStreak { days } => compute_streaks(records, today).longest >= *days,
        BadgeRule::MonthlySessions { fallback } => {
            let target = if goals.weekly_sessions > 0 {
                goals.weekly_sessions
            } else {
                *fallback
            };
            let sessions = records
                .iter()
                .filter_map(ActivityRecord::parsed_date)
                .filter(|d| d.year() == today.year() && d.month() == today.month())
                .count();
            sessions >= target as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(t: ActivityType, calories: u32, d: NaiveDate) -> ActivityRecord {
        ActivityRecord::new(t, 30, calories, d)
    }

    #[test]
    fn test_calorie_badge_unlocks_at_threshold() {
        let today = date(2025, 8, 22);
        let goals = Goals::default();
        let none = BTreeSet::new();

        let below = vec![record(ActivityType::Walk, 999, date(2025, 1, 1))];
        assert!(!evaluate_badges(&below, &goals, &none, today).contains(CALORIES_1000));

        let at = vec![
            record(ActivityType::Walk, 400, date(2025, 1, 1)),
            record(ActivityType::Run, 600, date(2025, 2, 1)),
        ];
        assert!(evaluate_badges(&at, &goals, &none, today).contains(CALORIES_1000));
    }

    #[test]
    fn test_run_count_badge_ignores_other_types() {
        let today = date(2025, 8, 22);
        let goals = Goals::default();
        let none = BTreeSet::new();

        let mut records: Vec<ActivityRecord> = (0..9)
            .map(|i| record(ActivityType::Run, 0, date(2025, 1, 1) + Duration::days(i)))
            .collect();
        records.push(record(ActivityType::Walk, 0, date(2025, 1, 20)));
        assert!(!evaluate_badges(&records, &goals, &none, today).contains(FIRST_10_RUNS));

        records.push(record(ActivityType::Run, 0, date(2025, 1, 21)));
        assert!(evaluate_badges(&records, &goals, &none, today).contains(FIRST_10_RUNS));
    }

    #[test]
    fn test_streak_badge_uses_30_day_window() {
        let today = date(2025, 8, 22);
        let goals = Goals::default();
        let none = BTreeSet::new();

        let recent: Vec<ActivityRecord> = (0..7)
            .map(|i| record(ActivityType::Yoga, 0, today - Duration::days(i)))
            .collect();
        assert!(evaluate_badges(&recent, &goals, &none, today).contains(STREAK_7_DAYS));

        // Same run far outside the window does not count
        let stale: Vec<ActivityRecord> = (60..67)
            .map(|i| record(ActivityType::Yoga, 0, today - Duration::days(i)))
            .collect();
        assert!(!evaluate_badges(&stale, &goals, &none, today).contains(STREAK_7_DAYS));
    }

    #[test]
    fn test_monthly_goal_badge_uses_goal_target() {
        let today = date(2025, 8, 22);
        let goals = Goals {
            weekly_sessions: 3,
            ..Goals::default()
        };
        let none = BTreeSet::new();

        let records: Vec<ActivityRecord> = (1..=3)
            .map(|d| record(ActivityType::Swimming, 0, date(2025, 8, d)))
            .collect();
        assert!(evaluate_badges(&records, &goals, &none, today).contains(MONTHLY_GOAL));

        // Sessions in a different month do not count
        let other_month: Vec<ActivityRecord> = (1..=3)
            .map(|d| record(ActivityType::Swimming, 0, date(2025, 7, d)))
            .collect();
        assert!(!evaluate_badges(&other_month, &goals, &none, today).contains(MONTHLY_GOAL));
    }

    #[test]
    fn test_monthly_goal_badge_fallback_when_unset() {
        let today = date(2025, 8, 22);
        let goals = Goals {
            weekly_sessions: 0,
            ..Goals::default()
        };
        let none = BTreeSet::new();

        let fourteen: Vec<ActivityRecord> = (1..=14)
            .map(|d| record(ActivityType::Walk, 0, date(2025, 8, d)))
            .collect();
        assert!(!evaluate_badges(&fourteen, &goals, &none, today).contains(MONTHLY_GOAL));

        let fifteen: Vec<ActivityRecord> = (1..=15)
            .map(|d| record(ActivityType::Walk, 0, date(2025, 8, d)))
            .collect();
        assert!(evaluate_badges(&fifteen, &goals, &none, today).contains(MONTHLY_GOAL));
    }

    #[test]
    fn test_earned_badges_never_revoked() {
        let today = date(2025, 8, 22);
        let goals = Goals::default();
        let mut previously = BTreeSet::new();
        previously.insert(CALORIES_1000.to_string());
        previously.insert(STREAK_7_DAYS.to_string());

        // No records at all: every rule is false, yet the earned set survives
        let earned = evaluate_badges(&[], &goals, &previously, today);
        assert!(earned.is_superset(&previously));
        assert_eq!(earned, previously);
    }

    #[test]
    fn test_catalogue_ids_unique() {
        let catalogue = badge_catalogue();
        let ids: BTreeSet<&str> = catalogue.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalogue.len());
    }
}
