use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use super::batch::{self, SweepOptions};
use crate::common::errors::SweepError;

/// One cleanup instruction, as supplied by the config file.
///
/// With `extension` set, only direct children of `path` with that name
/// suffix are candidates. Without it, the whole tree under `path` is swept
/// and emptied directories are pruned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directive {
    pub path: PathBuf,

    /// Name suffix match, case-sensitive, no leading-dot normalization:
    /// ".log" and "log" are different filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    pub remove_by_age: bool,
}

/// How a directive swept its target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepMode {
    ByExtension(String),
    EmptyOut,
}

impl std::fmt::Display for SweepMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepMode::ByExtension(ext) => write!(f, "by extension '{}'", ext),
            SweepMode::EmptyOut => write!(f, "empty out"),
        }
    }
}

/// Report from one executed directive
#[derive(Debug, Serialize)]
pub struct DirectiveReport {
    pub path: PathBuf,
    pub mode: SweepMode,
    pub files_removed: usize,
    pub dirs_removed: usize,
    pub dry_run: bool,
}

/// Report from a full run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub directives: Vec<DirectiveReport>,
}

impl RunReport {
    pub fn total_files(&self) -> usize {
        self.directives.iter().map(|d| d.files_removed).sum()
    }

    pub fn total_dirs(&self) -> usize {
        self.directives.iter().map(|d| d.dirs_removed).sum()
    }
}

/// Execute directives in order. The first failing directive aborts the run:
/// no skip-and-continue, and a failed directive never contributes a count
/// to the report.
pub fn run(directives: &[Directive], dry_run: bool) -> Result<RunReport, SweepError> {
    let mut reports = Vec::with_capacity(directives.len());
    for directive in directives {
        reports.push(execute(directive, dry_run)?);
    }
    Ok(RunReport {
        directives: reports,
    })
}

/// Execute a single directive
pub fn execute(directive: &Directive, dry_run: bool) -> Result<DirectiveReport, SweepError> {
    let opts = SweepOptions {
        check_age: directive.remove_by_age,
        dry_run,
    };
    match &directive.extension {
        Some(ext) => remove_by_extension(&directive.path, ext, opts),
        None => empty_directory(&directive.path, opts),
    }
}

/// Delete direct children of `directory` whose name ends with `extension`.
///
/// Non-recursive: subdirectories are neither descended into nor deleted,
/// even when their name matches the suffix.
pub fn remove_by_extension(
    directory: &Path,
    extension: &str,
    opts: SweepOptions,
) -> Result<DirectiveReport, SweepError> {
    info!(
        "Removing {} files from {}",
        extension.to_uppercase(),
        directory.display()
    );

    let matching: Vec<PathBuf> = files_in_directory(directory)?
        .into_iter()
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().ends_with(extension))
                .unwrap_or(false)
        })
        .collect();

    let removed = batch::remove_files(&matching, opts)?;

    Ok(DirectiveReport {
        path: directory.to_path_buf(),
        mode: SweepMode::ByExtension(extension.to_string()),
        files_removed: removed.len(),
        dirs_removed: 0,
        dry_run: opts.dry_run,
    })
}

/// Sweep the whole tree under `root`, pruning directories left empty.
///
/// Directories are discovered top-down, then processed in reverse so the
/// deepest ones come first. That ordering is what lets a single pass both
/// empty and delete nested directories: a parent only becomes empty after
/// its children have been visited and removed. The root itself is never
/// deleted, even when it ends up empty.
pub fn empty_directory(root: &Path, opts: SweepOptions) -> Result<DirectiveReport, SweepError> {
    let mut directories = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            SweepError::List {
                path,
                source: e.into(),
            }
        })?;
        if entry.file_type().is_dir() {
            directories.push(entry.into_path());
        }
    }

    let mut files_removed = 0usize;
    let mut dirs_removed = 0usize;
    // Dry-run bookkeeping: paths that would already be gone by this point
    let mut hypothetically_removed: HashSet<PathBuf> = HashSet::new();

    for directory in directories.iter().rev() {
        info!("Cleaning {}", directory.display());

        let files = files_in_directory(directory)?;
        let removed = batch::remove_files(&files, opts)?;
        files_removed += removed.len();

        if directory == root {
            continue;
        }

        if opts.dry_run {
            hypothetically_removed.extend(removed);
            if would_be_empty(directory, &hypothetically_removed)? {
                hypothetically_removed.insert(directory.clone());
                dirs_removed += 1;
            }
        } else if directory_is_empty(directory)? {
            // remove_dir is non-recursive on purpose: if something
            // repopulated the directory since the check, this fails
            // loudly instead of force-deleting content.
            std::fs::remove_dir(directory)
                .map_err(|e| SweepError::remove_dir(directory, e))?;
            dirs_removed += 1;
        }
    }

    Ok(DirectiveReport {
        path: root.to_path_buf(),
        mode: SweepMode::EmptyOut,
        files_removed,
        dirs_removed,
        dry_run: opts.dry_run,
    })
}

/// True iff a fresh listing of `directory` yields no entries of any kind.
/// Always recomputed, never cached.
pub fn directory_is_empty(directory: &Path) -> Result<bool, SweepError> {
    let mut entries = std::fs::read_dir(directory).map_err(|e| SweepError::list(directory, e))?;
    Ok(entries.next().is_none())
}

/// Dry-run variant of the emptiness check: the directory counts as empty
/// when every remaining entry is one we would already have removed.
fn would_be_empty(directory: &Path, removed: &HashSet<PathBuf>) -> Result<bool, SweepError> {
    for entry in std::fs::read_dir(directory).map_err(|e| SweepError::list(directory, e))? {
        let entry = entry.map_err(|e| SweepError::list(directory, e))?;
        if !removed.contains(&entry.path()) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Direct regular files of `directory`, non-recursive. Subdirectories and
/// other entry kinds never enter a deletion batch; they only count toward
/// the emptiness check.
fn files_in_directory(directory: &Path) -> Result<Vec<PathBuf>, SweepError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(|e| SweepError::list(directory, e))? {
        let entry = entry.map_err(|e| SweepError::list(directory, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
