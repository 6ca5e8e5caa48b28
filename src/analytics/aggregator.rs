// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Date-bucketed aggregation of activity records for charting
//!
//! The expected bucket labels for the requested window are built FIRST, so
//! buckets with zero activity still appear with value 0 instead of leaving
//! gaps in the chart. Records are then folded into buckets by their actual
//! calendar date, never by label text: weekday labels repeat across a
//! multi-week window and month labels repeat across years, and label-keyed
//! folding would conflate those buckets and double-count on render.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Granularity;
use crate::dates::weekday_abbrev;
use crate::models::ActivityRecord;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One labeled slot of an aggregated time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Chart label: weekday abbreviation, day-of-month number, or month
    /// abbreviation (with year when the window spans multiple years)
    pub label: String,
    /// Total kilocalories across records in this bucket
    pub calories: u64,
    /// Total active minutes across records in this bucket
    pub minutes: u64,
    /// Number of records in this bucket, counted even when both sums are 0
    pub sessions: u32,
}

impl Bucket {
    fn empty(label: String) -> Self {
        Self {
            label,
            calories: 0,
            minutes: 0,
            sessions: 0,
        }
    }

    fn add(&mut self, record: &ActivityRecord) {
        self.calories += u64::from(record.calories);
        self.minutes += u64::from(record.duration_minutes);
        self.sessions += 1;
    }
}

/// Aggregate records into an ordered, gap-free chart series.
///
/// - `Granularity::Week`: the trailing `7 * range` days ending `today`, one
///   bucket per day labeled by weekday abbreviation.
/// - `Granularity::Month`: every day of the current calendar month, labeled
///   by day number. `range` is ignored.
/// - `Granularity::Year`: the 12 months of the current year, or `range * 12`
///   `"Mon YYYY"` buckets across the trailing `range` years.
///
/// Records whose date fails to parse, or falls outside the window, are
/// silently excluded. Output is chronologically ascending with length
/// exactly equal to the expected bucket count.
pub fn aggregate(
    records: &[ActivityRecord],
    granularity: Granularity,
    range: u32,
    today: NaiveDate,
) -> Vec<Bucket> {
    let range = range.max(1);
    match granularity {
        Granularity::Week => aggregate_trailing_days(records, 7 * range, today),
        Granularity::Month => aggregate_month_days(records, today),
        Granularity::Year => aggregate_months(records, range, today),
    }
}

/// Trailing `days` calendar days ending `today`, one bucket per day.
fn aggregate_trailing_days(records: &[ActivityRecord], days: u32, today: NaiveDate) -> Vec<Bucket> {
    let start = today - Duration::days(i64::from(days) - 1);
    let mut buckets: Vec<Bucket> = (0..days)
        .map(|i| Bucket::empty(weekday_abbrev(start + Duration::days(i64::from(i)))))
        .collect();

    for record in records {
        if let Some(date) = record.parsed_date() {
            let offset = (date - start).num_days();
            if (0..i64::from(days)).contains(&offset) {
                buckets[offset as usize].add(record);
            }
        }
    }
    buckets
}

/// Every day of `today`'s calendar month.
fn aggregate_month_days(records: &[ActivityRecord], today: NaiveDate) -> Vec<Bucket> {
    let days = days_in_month(today);
    let mut buckets: Vec<Bucket> = (1..=days).map(|d| Bucket::empty(d.to_string())).collect();

    for record in records {
        if let Some(date) = record.parsed_date() {
            if date.year() == today.year() && date.month() == today.month() {
                buckets[date.day0() as usize].add(record);
            }
        }
    }
    buckets
}

/// Month buckets for the trailing `range` calendar years ending `today`'s
/// year. Labels carry the year when the window spans more than one.
fn aggregate_months(records: &[ActivityRecord], range: u32, today: NaiveDate) -> Vec<Bucket> {
    let first_year = today.year() - range as i32 + 1;
    let mut buckets: Vec<Bucket> = (first_year..=today.year())
        .flat_map(|year| {
            MONTH_ABBREV.iter().map(move |abbrev| {
                if range > 1 {
                    Bucket::empty(format!("{abbrev} {year}"))
                } else {
                    Bucket::empty((*abbrev).to_string())
                }
            })
        })
        .collect();

    for record in records {
        if let Some(date) = record.parsed_date() {
            if date.year() >= first_year && date.year() <= today.year() {
                let index = (date.year() - first_year) as usize * 12 + date.month0() as usize;
                buckets[index].add(record);
            }
        }
    }
    buckets
}

/// Number of days in `date`'s month, found by probing day-of-month validity.
fn days_in_month(date: NaiveDate) -> u32 {
    (28..=31)
        .rev()
        .find(|d| date.with_day(*d).is_some())
        .unwrap_or(28)
}
