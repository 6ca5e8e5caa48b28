// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for the fitness dashboard: activity records, the
//! open activity-type enumeration, and user goal targets.
//!
//! ## Design Principles
//!
//! - **Defensive deserialization**: persisted data may come from older
//!   versions or hand-edited files. Numeric fields coerce missing, string,
//!   or garbage values to 0 rather than failing the whole load.
//! - **Dates stay strings**: `date` is kept in its canonical `YYYY-MM-DD`
//!   form so an unparseable value survives loading and is filtered by the
//!   analytics instead of rejected by serde.
//! - **Open enumeration**: activity types outside the known set round-trip
//!   as free text.

use serde::{Deserialize, Deserializer, Serialize};
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

use crate::constants::{default_goals, CALORIES_PER_MINUTE_FALLBACK};
use crate::dates::{date_key, parse_date_key};

/// Category of a logged activity.
///
/// The known variants cover the types the log-entry surface offers; anything
/// else is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    /// Running
    Run,
    /// Walking
    Walk,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Yoga practice
    Yoga,
    /// Any free-text type outside the known set
    Other(String),
}

impl ActivityType {
    /// Display label, matching the canonical form stored on disk.
    pub fn label(&self) -> &str {
        match self {
            Self::Run => "Run",
            Self::Walk => "Walk",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::Yoga => "Yoga",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ActivityType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Run" => Self::Run,
            "Walk" => Self::Walk,
            "Cycling" => Self::Cycling,
            "Swimming" => Self::Swimming,
            "Yoga" => Self::Yoga,
            _ => Self::Other(s),
        }
    }
}

impl From<ActivityType> for String {
    fn from(t: ActivityType) -> Self {
        t.label().to_string()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single logged workout activity.
///
/// The sole entity of the system. The analytics treat a slice of records as
/// an immutable snapshot: they read and derive, never mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique identifier; uuid v4 by construction, but arbitrary ids
    /// (including legacy numeric timestamps) are accepted on load
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    /// Activity category
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Duration in minutes; missing or unparseable values contribute 0
    #[serde(rename = "duration", default, deserialize_with = "lenient_u32")]
    pub duration_minutes: u32,

    /// Kilocalories burned; missing or unparseable values contribute 0
    #[serde(default, deserialize_with = "lenient_u32")]
    pub calories: u32,

    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Calendar day of the activity, canonical `YYYY-MM-DD` local form.
    /// Kept as a string; invalid values are filtered during aggregation.
    #[serde(default)]
    pub date: String,
}

impl ActivityRecord {
    /// Create a record with a fresh id.
    pub fn new(
        activity_type: ActivityType,
        duration_minutes: u32,
        calories: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            activity_type,
            duration_minutes,
            calories,
            notes: None,
            date: date_key(date),
        }
    }

    /// Create a record deriving calories from duration, the fallback the
    /// log-entry surface applies when the calories field is left blank.
    pub fn with_derived_calories(
        activity_type: ActivityType,
        duration_minutes: u32,
        date: NaiveDate,
    ) -> Self {
        let calories = duration_minutes.saturating_mul(CALORIES_PER_MINUTE_FALLBACK);
        Self::new(activity_type, duration_minutes, calories, date)
    }

    /// Attach free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The record's calendar day, or `None` when the stored string is not a
    /// valid date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}

/// User-configured goal targets.
///
/// A target of 0 means "unset"; consumers define percentage-of-goal as 0 in
/// that case rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    /// Daily calorie-burn target (kcal)
    pub daily_calories: u32,
    /// Weekly active-minutes target
    pub weekly_minutes: u32,
    /// Weekly session-count target
    pub weekly_sessions: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            daily_calories: default_goals::DAILY_CALORIES,
            weekly_minutes: default_goals::WEEKLY_MINUTES,
            weekly_sessions: default_goals::WEEKLY_SESSIONS,
        }
    }
}

/// Accept a number, numeric string, or anything else for a non-negative
/// integer field; unparseable and negative inputs coerce to 0.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_u32(&value))
}

fn coerce_u32(value: &serde_json::Value) -> u32 {
    let parsed = match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64),
        _ => None,
    };
    parsed.unwrap_or(0).min(u64::from(u32::MAX)) as u32
}

/// Accept string or legacy numeric-timestamp ids.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
