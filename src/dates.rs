// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Local calendar-day keys and week boundaries
//!
//! All date keys are derived from the LOCAL calendar day, never UTC. Mixing
//! the two within one computation shifts streak and bucket boundaries by up
//! to a day for users east or west of UTC, so the wall clock is read in
//! exactly one place ([`today_local`]) and every analytics function takes
//! `today` as an explicit parameter.
//!
//! Weeks start on Monday throughout the crate.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Canonical format of a calendar-day key: `YYYY-MM-DD`
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its canonical `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` key back into a date.
///
/// Returns `None` for anything that is not a valid calendar date; callers
/// filter such records out of aggregation rather than failing.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

/// The Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = (date.weekday().num_days_from_sunday() + 6) % 7;
    date - Duration::days(i64::from(days_from_monday))
}

/// Today's LOCAL calendar day.
///
/// The only place the crate reads the wall clock.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Three-letter weekday abbreviation ("Mon".."Sun").
pub fn weekday_abbrev(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
