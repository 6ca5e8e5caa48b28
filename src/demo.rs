// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed demo dataset
//!
//! Seeded by the storage collaborator when no activities have been logged
//! yet, so a fresh installation renders populated charts instead of an empty
//! dashboard.

use crate::models::{ActivityRecord, ActivityType, Goals};

fn demo_record(
    id: &str,
    activity_type: ActivityType,
    duration_minutes: u32,
    calories: u32,
    notes: &str,
    date: &str,
) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        activity_type,
        duration_minutes,
        calories,
        notes: Some(notes.to_string()),
        date: date.to_string(),
    }
}

/// The demo activity set. Ids are stable so reseeding is idempotent.
pub fn demo_activities() -> Vec<ActivityRecord> {
    vec![
        demo_record("demo-1", ActivityType::Run, 30, 300, "Morning jog", "2025-08-20"),
        demo_record("demo-2", ActivityType::Cycling, 60, 600, "Road ride", "2025-08-21"),
        demo_record("demo-3", ActivityType::Walk, 20, 100, "Evening walk", "2025-08-22"),
        demo_record("demo-4", ActivityType::Swimming, 40, 350, "Pool session", "2025-08-23"),
    ]
}

/// Goal targets shown alongside the demo dataset.
pub fn demo_goals() -> Goals {
    Goals {
        daily_calories: 2000,
        weekly_minutes: 600,
        weekly_sessions: 10,
    }
}
