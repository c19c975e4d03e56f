//! File timestamp fix-up for converted notes

use crate::error::Result;
use chrono::{DateTime, FixedOffset, Local};
use filetime::FileTime;
use std::path::Path;
use std::process::Command;
use tracing::warn;

fn file_time(at: &DateTime<FixedOffset>) -> FileTime {
    FileTime::from_unix_time(at.timestamp(), at.timestamp_subsec_nanos())
}

/// Set access time to `created` and modification time to `modified`.
///
/// On macOS the creation date is also set through `SetFile`; a failure there
/// is logged and otherwise ignored.
pub fn apply_entry_times(
    path: &Path,
    created: &DateTime<FixedOffset>,
    modified: &DateTime<FixedOffset>,
) -> Result<()> {
    filetime::set_file_times(path, file_time(created), file_time(modified))?;

    if cfg!(target_os = "macos") {
        if let Err(message) = set_creation_date(path, created) {
            warn!(
                "Could not set creation date for {}: {}",
                path.display(),
                message
            );
        }
    }

    Ok(())
}

/// `MM/DD/YYYY HH:MM:SS` in local time, as `SetFile -d` expects
pub fn setfile_date(at: &DateTime<FixedOffset>) -> String {
    at.with_timezone(&Local)
        .format("%m/%d/%Y %H:%M:%S")
        .to_string()
}

fn set_creation_date(path: &Path, created: &DateTime<FixedOffset>) -> std::result::Result<(), String> {
    let status = Command::new("SetFile")
        .arg("-d")
        .arg(setfile_date(created))
        .arg(path)
        .status()
        .map_err(|e| format!("failed to run SetFile: {}", e))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("SetFile exited with {}", status))
    }
}
