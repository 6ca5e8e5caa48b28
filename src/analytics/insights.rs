// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Period summaries and trend insights
//!
//! Compares the current period (trailing week, calendar month, or calendar
//! year) against the one before it: totals, per-session averages, the most
//! active weekday, the most frequent activity type, and percentage trends.
//! Presentation decides how to phrase the numbers; this module only derives
//! them.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::progress::percentage;
use super::Granularity;
use crate::models::{ActivityRecord, ActivityType, Goals};

/// Summed activity over one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total kilocalories
    pub calories: u64,
    /// Total active minutes
    pub minutes: u64,
    /// Number of records
    pub sessions: u32,
}

/// Derived summary of the current period vs the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// Totals for the current period
    pub current: PeriodTotals,
    /// Totals for the period immediately before
    pub previous: PeriodTotals,
    /// Mean calories per session in the current period (0 when empty)
    pub avg_calories_per_session: u64,
    /// Mean minutes per session in the current period (0 when empty)
    pub avg_minutes_per_session: u64,
    /// Weekday with the highest calorie total in the current period
    pub top_weekday: Option<String>,
    /// Most frequent activity type in the current period
    pub top_activity: Option<ActivityType>,
    /// Calorie change vs the previous period, percent; `None` when the
    /// previous period had no calories to compare against
    pub calories_trend_pct: Option<f64>,
    /// Minute change vs the previous period, percent
    pub minutes_trend_pct: Option<f64>,
    /// Current-period calories vs the daily calorie target, clamped [0, 100]
    pub goal_calories_pct: f64,
    /// Current-period minutes vs the weekly minutes target, clamped [0, 100]
    pub goal_minutes_pct: f64,
    /// Current-period sessions vs the weekly sessions target, clamped [0, 100]
    pub goal_sessions_pct: f64,
}

/// Sum of calories/minutes/sessions over the current period.
pub fn period_totals(
    records: &[ActivityRecord],
    granularity: Granularity,
    today: NaiveDate,
) -> PeriodTotals {
    totals(records, |d| in_current_period(d, granularity, today))
}

/// Summarize the current period against the previous one.
pub fn summarize(
    records: &[ActivityRecord],
    goals: &Goals,
    granularity: Granularity,
    today: NaiveDate,
) -> PeriodSummary {
    let current = totals(records, |d| in_current_period(d, granularity, today));
    let previous = totals(records, |d| in_previous_period(d, granularity, today));

    let mut calories_by_weekday: HashMap<String, u64> = HashMap::new();
    let mut sessions_by_type: HashMap<ActivityType, u32> = HashMap::new();
    for record in records {
        let Some(date) = record.parsed_date() else {
            continue;
        };
        if !in_current_period(date, granularity, today) {
            continue;
        }
        *calories_by_weekday
            .entry(date.format("%A").to_string())
            .or_default() += u64::from(record.calories);
        *sessions_by_type
            .entry(record.activity_type.clone())
            .or_default() += 1;
    }

    let sessions = u64::from(current.sessions);
    PeriodSummary {
        avg_calories_per_session: if sessions > 0 { current.calories / sessions } else { 0 },
        avg_minutes_per_session: if sessions > 0 { current.minutes / sessions } else { 0 },
        top_weekday: pick_max(calories_by_weekday).map(|(day, _)| day),
        top_activity: pick_max(sessions_by_type).map(|(t, _)| t),
        calories_trend_pct: trend(current.calories, previous.calories),
        minutes_trend_pct: trend(current.minutes, previous.minutes),
        goal_calories_pct: percentage(current.calories, goals.daily_calories),
        goal_minutes_pct: percentage(current.minutes, goals.weekly_minutes),
        goal_sessions_pct: percentage(u64::from(current.sessions), goals.weekly_sessions),
        current,
        previous,
    }
}

/// Session counts per activity type in the current period, most frequent
/// first (ties broken by label).
pub fn type_distribution(
    records: &[ActivityRecord],
    granularity: Granularity,
    today: NaiveDate,
) -> Vec<(ActivityType, u32)> {
    let mut counts: HashMap<ActivityType, u32> = HashMap::new();
    for record in records {
        if let Some(date) = record.parsed_date() {
            if in_current_period(date, granularity, today) {
                *counts.entry(record.activity_type.clone()).or_default() += 1;
            }
        }
    }
    let mut distribution: Vec<(ActivityType, u32)> = counts.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

fn totals(records: &[ActivityRecord], in_period: impl Fn(NaiveDate) -> bool) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for record in records {
        if let Some(date) = record.parsed_date() {
            if in_period(date) {
                totals.calories += u64::from(record.calories);
                totals.minutes += u64::from(record.duration_minutes);
                totals.sessions += 1;
            }
        }
    }
    totals
}

fn in_current_period(date: NaiveDate, granularity: Granularity, today: NaiveDate) -> bool {
    match granularity {
        Granularity::Week => date > today - Duration::days(7) && date <= today,
        Granularity::Month => date.year() == today.year() && date.month() == today.month(),
        Granularity::Year => date.year() == today.year(),
    }
}

fn in_previous_period(date: NaiveDate, granularity: Granularity, today: NaiveDate) -> bool {
    match granularity {
        Granularity::Week => {
            date > today - Duration::days(14) && date <= today - Duration::days(7)
        }
        Granularity::Month => {
            let (prev_year, prev_month) = if today.month() == 1 {
                (today.year() - 1, 12)
            } else {
                (today.year(), today.month() - 1)
            };
            date.year() == prev_year && date.month() == prev_month
        }
        Granularity::Year => date.year() == today.year() - 1,
    }
}

fn trend(current: u64, previous: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    Some((current as f64 - previous as f64) / previous as f64 * 100.0)
}

fn pick_max<K: Ord, V: Ord>(map: HashMap<K, V>) -> Option<(K, V)> {
    map.into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}
