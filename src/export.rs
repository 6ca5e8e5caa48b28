// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CSV export of activity records
//!
//! Column order is `Type,Duration,Calories,Notes,Date` with a mandatory
//! header row. Fields containing the delimiter, quotes, or line breaks are
//! quoted so free-text notes cannot corrupt the row structure.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::ActivityRecord;

const HEADER: &str = "Type,Duration,Calories,Notes,Date";

/// Serialize records to CSV in input order. Empty input yields the header
/// row only.
pub fn to_csv(records: &[ActivityRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for record in records {
        let row = [
            escape_field(record.activity_type.label()),
            Cow::Owned(record.duration_minutes.to_string()),
            Cow::Owned(record.calories.to_string()),
            escape_field(record.notes.as_deref().unwrap_or("")),
            escape_field(&record.date),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Write the CSV rendition of `records` to `path`.
pub fn write_csv(path: &Path, records: &[ActivityRecord]) -> Result<()> {
    let csv = to_csv(records);
    fs::write(path, csv)
        .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
    info!(path = %path.display(), rows = records.len(), "exported activities to CSV");
    Ok(())
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
