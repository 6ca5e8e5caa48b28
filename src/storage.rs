// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Storage Collaborator
//!
//! File-backed persistence for activity records, the earned-badge set, and
//! goal configuration. Records and badges are JSON; goals are TOML under the
//! platform data directory.
//!
//! Loads never fail: a missing, unreadable, or malformed file degrades to
//! the empty collection (or default goals), and an empty activity collection
//! is seeded with the demo dataset. Saves are atomic from the caller's
//! perspective: content is written to a temp file in the same directory and
//! renamed over the target, so no partial write is ever observable.

use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::constants::files;
use crate::demo::demo_activities;
use crate::models::{ActivityRecord, Goals};

/// Errors surfaced by save operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize goals: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Owner of all persisted dashboard state.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Use an explicit directory; created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open storage under the platform data directory
    /// (`<data_dir>/fitness-dashboard`), falling back to a relative
    /// directory when the platform offers none.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs::data_dir()
            .map(|p| p.join(files::APP_DIR))
            .unwrap_or_else(|| PathBuf::from(files::APP_DIR));
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the persisted files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the activity collection, seeding the demo dataset when nothing
    /// has been logged yet (missing file, malformed content, or an empty
    /// list all count as "nothing logged").
    pub fn load_activities(&self) -> Vec<ActivityRecord> {
        match self.read_json::<Vec<ActivityRecord>>(files::ACTIVITIES) {
            Some(records) if !records.is_empty() => records,
            _ => {
                let seed = demo_activities();
                info!(count = seed.len(), "seeding demo activities");
                if let Err(err) = self.save_activities(&seed) {
                    warn!(error = %err, "failed to persist demo seed");
                }
                seed
            }
        }
    }

    /// Overwrite the persisted activity collection.
    pub fn save_activities(&self, records: &[ActivityRecord]) -> Result<(), StorageError> {
        self.write_atomic(files::ACTIVITIES, &serde_json::to_string_pretty(records)?)
    }

    /// Load the persisted earned-badge id set; empty when missing or
    /// malformed.
    pub fn load_earned_badges(&self) -> BTreeSet<String> {
        self.read_json(files::EARNED_BADGES).unwrap_or_default()
    }

    /// Overwrite the persisted earned-badge id set.
    pub fn save_earned_badges(&self, earned: &BTreeSet<String>) -> Result<(), StorageError> {
        self.write_atomic(files::EARNED_BADGES, &serde_json::to_string_pretty(earned)?)
    }

    /// Load the goal configuration; defaults when missing or malformed.
    pub fn load_goals(&self) -> Goals {
        let path = self.dir.join(files::GOALS);
        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "malformed goals file, using defaults");
                Goals::default()
            }),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no goals file, using defaults");
                Goals::default()
            }
        }
    }

    /// Overwrite the persisted goal configuration.
    pub fn save_goals(&self, goals: &Goals) -> Result<(), StorageError> {
        self.write_atomic(files::GOALS, &toml::to_string_pretty(goals)?)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "storage file not readable");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed storage file");
                None
            }
        }
    }

    fn write_atomic(&self, name: &str, content: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, self.dir.join(name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        (dir, storage)
    }

    #[test]
    fn test_empty_storage_seeds_demo_data() {
        let (_guard, storage) = storage();
        let records = storage.load_activities();
        assert_eq!(records, demo_activities());
        // The seed is persisted, not just returned
        assert!(_guard.path().join(files::ACTIVITIES).exists());
    }

    #[test]
    fn test_activities_round_trip() {
        let (_guard, storage) = storage();
        let date = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        let records = vec![
            ActivityRecord::new(ActivityType::Run, 30, 300, date).with_notes("tempo"),
            ActivityRecord::new(ActivityType::Yoga, 45, 120, date),
        ];
        storage.save_activities(&records).unwrap();
        assert_eq!(storage.load_activities(), records);
    }

    #[test]
    fn test_empty_saved_list_reseeds() {
        let (_guard, storage) = storage();
        storage.save_activities(&[]).unwrap();
        assert_eq!(storage.load_activities(), demo_activities());
    }

    #[test]
    fn test_malformed_activities_file_reseeds() {
        let (_guard, storage) = storage();
        fs::create_dir_all(storage.dir()).unwrap();
        fs::write(storage.dir().join(files::ACTIVITIES), "{not json").unwrap();
        assert_eq!(storage.load_activities(), demo_activities());
    }

    #[test]
    fn test_earned_badges_round_trip() {
        let (_guard, storage) = storage();
        assert!(storage.load_earned_badges().is_empty());

        let mut earned = BTreeSet::new();
        earned.insert("calories1000".to_string());
        earned.insert("streak7days".to_string());
        storage.save_earned_badges(&earned).unwrap();
        assert_eq!(storage.load_earned_badges(), earned);
    }

    #[test]
    fn test_malformed_badges_file_is_empty_set() {
        let (_guard, storage) = storage();
        fs::create_dir_all(storage.dir()).unwrap();
        fs::write(storage.dir().join(files::EARNED_BADGES), "42").unwrap();
        assert!(storage.load_earned_badges().is_empty());
    }

    #[test]
    fn test_goals_round_trip_and_defaults() {
        let (_guard, storage) = storage();
        assert_eq!(storage.load_goals(), Goals::default());

        let goals = Goals {
            daily_calories: 800,
            weekly_minutes: 450,
            weekly_sessions: 6,
        };
        storage.save_goals(&goals).unwrap();
        assert_eq!(storage.load_goals(), goals);
    }

    #[test]
    fn test_malformed_goals_file_uses_defaults() {
        let (_guard, storage) = storage();
        fs::create_dir_all(storage.dir()).unwrap();
        fs::write(storage.dir().join(files::GOALS), "daily_calories = \"lots\"").unwrap();
        assert_eq!(storage.load_goals(), Goals::default());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (_guard, storage) = storage();
        storage.save_activities(&demo_activities()).unwrap();
        let leftover = storage.dir().join(format!("{}.tmp", files::ACTIVITIES));
        assert!(!leftover.exists());
    }
}
