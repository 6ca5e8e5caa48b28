// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Application constants: trailing-window sizes, default goal targets, and
//! storage file names.

/// Trailing window, in days, used by the streak calculator and the streak
/// badge rule to bound their scans.
pub const STREAK_WINDOW_DAYS: u32 = 30;

/// Calories derived per minute of activity when an entry omits calories.
pub const CALORIES_PER_MINUTE_FALLBACK: u32 = 10;

/// Monthly session target used by the monthly-goal badge when the user has
/// not configured a session goal.
pub const MONTHLY_SESSIONS_FALLBACK: u32 = 15;

/// Starter goal targets applied before the user configures their own.
pub mod default_goals {
    /// Daily calorie-burn target (kcal)
    pub const DAILY_CALORIES: u32 = 500;

    /// Weekly active-minutes target
    pub const WEEKLY_MINUTES: u32 = 300;

    /// Weekly session-count target
    pub const WEEKLY_SESSIONS: u32 = 4;
}

/// File names used by the storage collaborator
pub mod files {
    /// Application data directory name under the platform data dir
    pub const APP_DIR: &str = "fitness-dashboard";

    /// Persisted activity records (JSON array)
    pub const ACTIVITIES: &str = "activities.json";

    /// Persisted earned badge ids (JSON array)
    pub const EARNED_BADGES: &str = "earned_badges.json";

    /// Persisted goal configuration (TOML)
    pub const GOALS: &str = "goals.toml";
}
