use chrono::{DateTime, Duration, Local, NaiveDate};
use std::path::PathBuf;
use tracing::info;

use crate::common::errors::SweepError;

/// Width of the separator line logged after each batch
pub const SEPARATOR_LEN: usize = 80;

/// Age gate: files are only deleted when strictly more than this many
/// calendar days old
pub const MAX_FILE_AGE_DAYS: i64 = 1;

/// Options shared by every sweep operation
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOptions {
    /// Only delete files older than the age gate
    pub check_age: bool,
    /// Report what would be removed without touching the filesystem
    pub dry_run: bool,
}

/// Age gate predicate: true when the file's last-modified calendar date is
/// strictly more than one day before `today`. This is calendar-date
/// arithmetic, not elapsed-duration arithmetic — a file modified 30 hours
/// ago may still be "yesterday" and therefore kept.
pub fn past_age_limit(today: NaiveDate, file_date: NaiveDate) -> bool {
    today - file_date > Duration::days(MAX_FILE_AGE_DAYS)
}

/// Delete a batch of files, subject to the age gate.
///
/// "Today" is captured once for the whole batch, so every file is judged
/// against the same reference date. Returns the paths that were removed
/// (or would be, in dry-run mode); the logged count always equals the
/// returned length, including the zero case.
///
/// Any metadata or delete failure aborts the batch: a partially processed
/// batch surfaces as an error, never as a success count.
pub fn remove_files(
    files: &[PathBuf],
    opts: SweepOptions,
) -> Result<Vec<PathBuf>, SweepError> {
    let today = Local::now().date_naive();
    let mut removed = Vec::new();

    for file in files {
        let modified = file
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| SweepError::metadata(file, e))?;
        let file_date = DateTime::<Local>::from(modified).date_naive();

        if opts.check_age && !past_age_limit(today, file_date) {
            continue;
        }

        if !opts.dry_run {
            std::fs::remove_file(file).map_err(|e| SweepError::remove_file(file, e))?;
        }
        removed.push(file.clone());
    }

    if opts.dry_run {
        info!("Would remove {} files", removed.len());
    } else {
        info!("Removed {} files", removed.len());
    }
    info!("{}", "=".repeat(SEPARATOR_LEN));

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_gate_today_kept() {
        let today = date(2024, 6, 15);
        assert!(!past_age_limit(today, today));
    }

    #[test]
    fn test_age_gate_yesterday_kept() {
        // Exactly one day is not *more* than one day
        assert!(!past_age_limit(date(2024, 6, 15), date(2024, 6, 14)));
    }

    #[test]
    fn test_age_gate_two_days_removed() {
        assert!(past_age_limit(date(2024, 6, 15), date(2024, 6, 13)));
    }

    #[test]
    fn test_age_gate_across_month_boundary() {
        assert!(!past_age_limit(date(2024, 7, 1), date(2024, 6, 30)));
        assert!(past_age_limit(date(2024, 7, 1), date(2024, 6, 29)));
    }

    #[test]
    fn test_fresh_files_survive_age_gate() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("fresh.txt");
        std::fs::write(&file, "new").unwrap();

        let removed = remove_files(
            &[file.clone()],
            SweepOptions {
                check_age: true,
                dry_run: false,
            },
        )
        .unwrap();

        assert!(removed.is_empty());
        assert!(file.exists());
    }

    #[test]
    fn test_unconditional_removal() {
        let dir = tempfile::TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "x").unwrap();
        std::fs::write(&b, "y").unwrap();

        let removed = remove_files(
            &[a.clone(), b.clone()],
            SweepOptions::default(),
        )
        .unwrap();

        assert_eq!(removed.len(), 2);
        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("keep.txt");
        std::fs::write(&file, "x").unwrap();

        let removed = remove_files(
            &[file.clone()],
            SweepOptions {
                check_age: false,
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(removed, vec![file.clone()]);
        assert!(file.exists());
    }

    #[test]
    fn test_vanished_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let ghost = dir.path().join("ghost.txt");

        let result = remove_files(&[ghost], SweepOptions::default());
        assert!(matches!(result, Err(SweepError::Metadata { .. })));
    }
}
