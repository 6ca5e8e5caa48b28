// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consecutive-day streak and missed-day calculation
//!
//! A streak is a maximal run of consecutive calendar days each containing at
//! least one record. Scans are bounded: the current-streak walk stops at the
//! first absent day, and the longest/missed computation covers a fixed
//! trailing 30-day window, so cost stays proportional to the record count
//! plus the window, never the full history.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::logged_days;
use crate::constants::STREAK_WINDOW_DAYS;
use crate::dates::{start_of_week, weekday_abbrev};
use crate::models::ActivityRecord;

/// Streak counters derived from the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive logged days ending today; 0 when today has no record
    pub current: u32,
    /// Longest run of consecutive logged days, the max over the trailing
    /// 30-day window and the current streak
    pub longest: u32,
    /// Days with no record in the trailing 30-day window
    pub missed_in_window: u32,
}

/// One cell of the current-week (Monday..Sunday) activity grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    /// The cell's calendar day
    pub date: NaiveDate,
    /// Single-letter weekday label ("M", "T", ...)
    pub label: String,
    /// Whether at least one record exists on this day
    pub logged: bool,
    /// Whether this cell is today
    pub is_today: bool,
}

/// Compute current streak, longest streak in the trailing 30-day window, and
/// missed days in that window.
///
/// Invariant: `missed_in_window` plus the sum of run lengths inside the
/// window always equals 30.
pub fn compute_streaks(records: &[ActivityRecord], today: NaiveDate) -> StreakSummary {
    let days = logged_days(records);

    let mut current = 0u32;
    let mut cursor = today;
    while days.contains(&cursor) {
        current += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    let mut longest = current;
    let mut missed = 0u32;
    let mut run = 0u32;
    for offset in 0..STREAK_WINDOW_DAYS {
        let day = today - Duration::days(i64::from(offset));
        if days.contains(&day) {
            run += 1;
            longest = longest.max(run);
        } else {
            missed += 1;
            run = 0;
        }
    }

    StreakSummary {
        current,
        longest,
        missed_in_window: missed,
    }
}

/// The current Monday-start week as seven grid cells.
pub fn week_grid(records: &[ActivityRecord], today: NaiveDate) -> Vec<WeekDay> {
    let days = logged_days(records);
    let start = start_of_week(today);
    (0..7)
        .map(|i| {
            let date = start + Duration::days(i);
            let label = weekday_abbrev(date)
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default();
            WeekDay {
                date,
                label,
                logged: days.contains(&date),
                is_today: date == today,
            }
        })
        .collect()
}

/// Days with no record among the trailing 7 days ending today.
pub fn missed_last_week(records: &[ActivityRecord], today: NaiveDate) -> u32 {
    let days = logged_days(records);
    (0..7)
        .filter(|i| !days.contains(&(today - Duration::days(*i))))
        .count() as u32
}
