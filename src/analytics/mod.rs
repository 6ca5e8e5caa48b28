// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Analytics Module
//!
//! Pure computations over an activity-record snapshot. Each function takes
//! the records, any goal configuration, and `today` as explicit inputs and
//! returns a derived value; nothing here reads the clock, the filesystem, or
//! any other global state.
//!
//! This module includes:
//! - Date-bucketed aggregation for charting
//! - Streak and missed-day calculation
//! - Achievement badge evaluation
//! - Goal-progress percentages
//! - Period summaries and trend insights

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::ActivityRecord;

pub mod aggregator;
pub mod badges;
pub mod insights;
pub mod progress;
pub mod streaks;

pub use aggregator::{aggregate, Bucket};
pub use badges::{badge_catalogue, evaluate_badges, BadgeRule, BadgeSpec};
pub use insights::{summarize, type_distribution, PeriodSummary, PeriodTotals};
pub use progress::{compute_progress, GoalProgress};
pub use streaks::{compute_streaks, missed_last_week, week_grid, StreakSummary, WeekDay};

/// Time resolution of an aggregated chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One bucket per day across a trailing multi-day window (weekday labels)
    Week,
    /// One bucket per day of the current calendar month
    Month,
    /// One bucket per month of the current (or trailing) calendar year(s)
    Year,
}

/// Distinct calendar days present in the record set.
///
/// Records with unparseable dates are excluded, matching the aggregation
/// contract.
pub(crate) fn logged_days(records: &[ActivityRecord]) -> HashSet<NaiveDate> {
    records.iter().filter_map(ActivityRecord::parsed_date).collect()
}
