// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Fitness Dashboard Core
//!
//! Pure, stateless computation core for a personal fitness-tracking dashboard.
//! Activity logs (type, duration, calories, notes, date) are aggregated into
//! calendar-aligned chart series, consecutive-day streak counters, achievement
//! badges, and goal-progress percentages.
//!
//! ## Features
//!
//! - **Calendar-aligned aggregation**: day/week/month/year bucket series with
//!   zero-filled gaps, suitable for charting
//! - **Streak tracking**: current streak, longest streak in a trailing 30-day
//!   window, and missed-day counts
//! - **Achievement badges**: a data-driven rule catalogue evaluated against
//!   the full history; earned badges are permanent
//! - **Goal progress**: daily calorie and weekly minute/session targets as
//!   clamped percentages
//! - **File-backed storage**: JSON persistence for records and badges, TOML
//!   for goal configuration, with demo-data seeding
//!
//! ## Architecture
//!
//! Every analytics function is pure: it takes the record snapshot, the goal
//! configuration, and `today` as explicit inputs and returns a value. The
//! storage collaborator owns all persistence; the core never reads the clock
//! or the filesystem on its own, so results are reproducible in tests.
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_dashboard::analytics::compute_streaks;
//! use fitness_dashboard::models::{ActivityRecord, ActivityType};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
//! let records = vec![
//!     ActivityRecord::new(ActivityType::Run, 30, 300, today),
//! ];
//!
//! let streaks = compute_streaks(&records, today);
//! assert_eq!(streaks.current, 1);
//! ```

/// Core data models for activity records, goals, and activity types
pub mod models;

/// Local calendar-day keys and week boundary helpers
pub mod dates;

/// Pure analytics over activity records: aggregation, streaks, badges, progress
pub mod analytics;

/// File-backed persistence for records, earned badges, and goals
pub mod storage;

/// Fixed demo dataset used to seed an empty installation
pub mod demo;

/// CSV export of activity records
pub mod export;

/// Application constants and default goal targets
pub mod constants;

/// Structured logging configuration
pub mod logging;
