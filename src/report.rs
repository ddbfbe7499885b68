use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::ReportEntry;

/// Write the report as pretty-printed JSON, replacing any existing file.
///
/// Entries are written in the order given; callers rely on scan order
/// surviving into the file.
pub fn save_report<P: AsRef<Path>>(path: P, entries: &[ReportEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a previously written report.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Vec<ReportEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<ReportEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}
