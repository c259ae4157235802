//! The on-disk cache: one flat file holding the raw API document verbatim.
//!
//! The parsed [`Vaktija`](crate::vaktija::Vaktija) is never persisted —
//! only the raw JSON is, and it is considered fresh for the calendar day
//! it was written on. Freshness takes an explicit `now` instead of
//! reading the wall clock so the check is deterministic under test.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local};

use crate::constants::CACHE_FILE_NAME;
use crate::error::VaktijaError;

/// Path of the cache file inside the configured cache directory.
pub fn cache_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILE_NAME)
}

/// Whether the cache file exists at all.
pub fn cache_exists(path: &Path) -> bool {
    path.exists()
}

/// Whether the cache file is outdated relative to `now`.
///
/// The file is outdated when its modification date (year and day of the
/// year) falls on any earlier day than `now`; the time of day within the
/// day is irrelevant. A missing file is always outdated.
pub fn cache_outdated(path: &Path, now: DateTime<Local>) -> Result<bool, VaktijaError> {
    if !cache_exists(path) {
        return Ok(true);
    }

    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| {
            VaktijaError::SourceUnavailable(format!(
                "could not read cache metadata at {}: {e}",
                path.display()
            ))
        })?;
    let mtime: DateTime<Local> = modified.into();

    Ok(compare_date(now, mtime) == Ordering::Greater)
}

/// Compare two instants by calendar day only: year first, then day of
/// the year.
fn compare_date(first: DateTime<Local>, second: DateTime<Local>) -> Ordering {
    first
        .year()
        .cmp(&second.year())
        .then(first.ordinal().cmp(&second.ordinal()))
}

/// Read the raw JSON document back out of the cache file.
pub fn read_cache(path: &Path) -> Result<String, VaktijaError> {
    fs::read_to_string(path).map_err(|e| {
        VaktijaError::SourceUnavailable(format!(
            "could not read cache file at {}: {e}",
            path.display()
        ))
    })
}

/// Write the raw JSON document to the cache file, creating the cache
/// directory if needed.
pub fn write_cache(path: &Path, json: &str) -> Result<(), VaktijaError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            VaktijaError::SourceUnavailable(format!(
                "could not create cache directory {}: {e}",
                dir.display()
            ))
        })?;
    }

    fs::write(path, json).map_err(|e| {
        VaktijaError::SourceUnavailable(format!(
            "could not write cache file at {}: {e}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_missing_cache_is_outdated() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        assert!(!cache_exists(&path));
        assert!(cache_outdated(&path, Local::now()).unwrap());
    }

    #[test]
    fn test_fresh_cache_same_day() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        write_cache(&path, "{}").unwrap();
        assert!(!cache_outdated(&path, Local::now()).unwrap());
    }

    #[test]
    fn test_cache_stale_the_next_day() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        write_cache(&path, "{}").unwrap();

        let tomorrow = Local::now() + Duration::days(1);
        assert!(cache_outdated(&path, tomorrow).unwrap());
    }

    #[test]
    fn test_cache_stale_the_next_year() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        write_cache(&path, "{}").unwrap();

        let next_year = Local::now() + Duration::days(366);
        assert!(cache_outdated(&path, next_year).unwrap());
    }

    #[test]
    fn test_future_mtime_is_not_stale() {
        // Only a strictly earlier day counts as outdated.
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        write_cache(&path, "{}").unwrap();

        let yesterday = Local::now() - Duration::days(1);
        assert!(!cache_outdated(&path, yesterday).unwrap());
    }

    #[test]
    fn test_round_trips_raw_document() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        let json = r#"{"lokacija": "Sarajevo"}"#;

        write_cache(&path, json).unwrap();
        assert_eq!(read_cache(&path).unwrap(), json);
    }

    #[test]
    fn test_write_creates_cache_directory() {
        let dir = tempdir().unwrap();
        let path = cache_path(&dir.path().join("nested"));
        write_cache(&path, "{}").unwrap();
        assert!(cache_exists(&path));
    }

    #[test]
    fn test_read_missing_cache_fails() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path());
        assert!(matches!(
            read_cache(&path),
            Err(VaktijaError::SourceUnavailable(_))
        ));
    }
}
