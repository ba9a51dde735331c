/// Scanner module: the sorted, serial directory walk shared by all tools.
///
/// The walk is built on `jwalk` in serial mode with sorting enabled, so
/// siblings are always visited in ascending byte order and the output of a
/// run is reproducible on an unchanged tree. Excluded entries are pruned in
/// `process_read_dir`, before the walker descends into them. Symbolic links
/// are never followed; a link (even one to a directory) is visited as a leaf.
pub mod rules;

pub use rules::ExclusionRules;

use crate::error::{Result, ScanError};
use jwalk::{Parallelism, WalkDir};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

/// A single non-directory entry handed to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Full path with `.` components removed (`./src/a.cpp` → `src/a.cpp`).
    pub path: PathBuf,
    /// Path relative to the scan root, used to mirror destinations.
    pub relative: PathBuf,
    /// `true` if the entry is a symbolic link.
    pub is_symlink: bool,
}

impl ScanEntry {
    /// Directory part of [`relative`](Self::relative); empty for files
    /// directly under the root.
    pub fn relative_dir(&self) -> &Path {
        self.relative.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Base name of the entry.
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }
}

/// Counters for a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Directories descended into (the root is not counted).
    pub dirs_entered: u64,
    /// Files and symlinks passed to the visitor.
    pub files_visited: u64,
    /// Entries for which the visitor returned `true`.
    pub files_matched: u64,
    /// Wall-clock time of the walk, including visitor work.
    pub duration: Duration,
}

/// Walk `root`, calling `visit` for every file that survives `rules`.
///
/// `visit` returns whether the entry met the caller's criterion; matches are
/// counted in the returned summary. Any error from the walker or the visitor
/// aborts the scan immediately. Work already done (copied files, printed
/// lines) is not rolled back.
pub fn scan<F>(root: &Path, rules: &ExclusionRules, mut visit: F) -> Result<ScanSummary>
where
    F: FnMut(&ScanEntry) -> Result<bool>,
{
    let start = Instant::now();

    // Fail up front on an unreadable or missing root.
    std::fs::read_dir(root).map_err(|e| ScanError::io("cannot read directory", root, e))?;

    let prune_rules = rules.clone();
    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial)
        .process_read_dir(move |depth, dir_path, _state, children| {
            // jwalk reads the root's parent first, with only the root in
            // `children`. The root itself is never subject to the rules.
            if depth.is_none() {
                return;
            }
            children.retain(|child| match child {
                Ok(entry) => {
                    let name = entry.file_name();
                    let excluded = prune_rules.excludes(name, &normalize(&dir_path.join(name)));
                    if excluded {
                        debug!("Excluded {}", dir_path.join(name).display());
                    }
                    !excluded
                }
                // Keep errors so the iterator reports them.
                Err(_) => true,
            });
        });

    let mut summary = ScanSummary::default();

    for entry_result in walker {
        let entry = entry_result?;

        // The root itself.
        if entry.depth == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            summary.dirs_entered += 1;
            continue;
        }

        let full_path = entry.path();
        let relative = full_path
            .strip_prefix(root)
            .map(normalize)
            .unwrap_or_else(|_| normalize(&full_path));

        let scan_entry = ScanEntry {
            path: normalize(&full_path),
            relative,
            is_symlink: file_type.is_symlink(),
        };

        summary.files_visited += 1;
        if visit(&scan_entry)? {
            summary.files_matched += 1;
        }
    }

    summary.duration = start.elapsed();
    debug!(
        "Scan of {} complete: {} dirs, {} files, {} matched in {:?}",
        root.display(),
        summary.dirs_entered,
        summary.files_visited,
        summary.files_matched,
        summary.duration
    );

    Ok(summary)
}

/// Remove `.` components from a path. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
