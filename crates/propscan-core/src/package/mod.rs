/// Package extraction: copy every file carrying a license tag into a
/// mirrored release tree, then apply the package fixups.
///
/// Destination directories are created lazily: a source directory with no
/// tagged files produces no directory in the package.
pub mod finalize;
pub mod version;

pub use finalize::finalize_package;
pub use version::{render_version_header, version_string};

use crate::error::{Result, ScanError};
use crate::property::{LicenseTag, PropertyStore};
use crate::scanner::{scan, ExclusionRules, ScanSummary};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination directory that is created on first use only.
///
/// Creation is idempotent: a directory that already exists (from an earlier
/// run, or created concurrently) is not an error.
#[derive(Debug)]
pub struct LazyDir {
    path: PathBuf,
    created: bool,
}

impl LazyDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            created: false,
        }
    }

    /// Create the directory if this handle has not done so yet, and return
    /// its path.
    pub fn ensure(&mut self) -> Result<&Path> {
        if !self.created {
            match fs::create_dir_all(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(e) => return Err(ScanError::io("cannot create directory", &self.path, e)),
            }
            debug!("Created {}", self.path.display());
            self.created = true;
        }
        Ok(self.path.as_path())
    }

    /// `true` once [`ensure`](Self::ensure) has succeeded.
    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Outcome of [`extract_package`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub scan: ScanSummary,
    pub files_copied: u64,
    /// Destination directories materialised during this run.
    pub dirs_created: u64,
}

/// Copy every file under `root` tagged with `tag` into `target`, mirroring
/// its path relative to `root`.
///
/// Existing files in `target` are overwritten, so repeated runs produce the
/// same tree.
pub fn extract_package<S>(
    root: &Path,
    target: &Path,
    tag: LicenseTag,
    store: &S,
    rules: &ExclusionRules,
) -> Result<ExtractSummary>
where
    S: PropertyStore + ?Sized,
{
    info!(
        "Extracting files tagged {tag} from {} into {}",
        root.display(),
        target.display()
    );

    // One handle per source directory, keyed by its root-relative path.
    let mut destinations: HashMap<PathBuf, LazyDir> = HashMap::new();
    let mut files_copied: u64 = 0;

    let scan_summary = scan(root, rules, |entry| {
        if !store.has_property(&entry.path, tag.as_str()) {
            debug!("Not tagged {tag}: {}", entry.path.display());
            return Ok(false);
        }

        let relative_dir = entry.relative_dir();
        let destination = destinations
            .entry(relative_dir.to_path_buf())
            .or_insert_with(|| LazyDir::new(target.join(relative_dir)));
        let dest_file = destination.ensure()?.join(entry.file_name());

        fs::copy(&entry.path, &dest_file)
            .map_err(|e| ScanError::io("cannot copy", &entry.path, e))?;
        debug!("Copied {} -> {}", entry.path.display(), dest_file.display());
        files_copied += 1;
        Ok(true)
    })?;

    let summary = ExtractSummary {
        scan: scan_summary,
        files_copied,
        dirs_created: destinations.values().filter(|d| d.is_created()).count() as u64,
    };

    info!(
        "Copied {} of {} files into {} directories in {:?}",
        summary.files_copied,
        summary.scan.files_visited,
        summary.dirs_created,
        summary.scan.duration
    );

    Ok(summary)
}

/// Extract the package and apply every fixup, stamping the version for
/// `date`.
pub fn build_package<S>(
    root: &Path,
    target: &Path,
    tag: LicenseTag,
    store: &S,
    rules: &ExclusionRules,
    date: NaiveDate,
) -> Result<ExtractSummary>
where
    S: PropertyStore + ?Sized,
{
    let summary = extract_package(root, target, tag, store, rules)?;
    finalize_package(target, date)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lazy_dir_is_created_once_on_demand() {
        let tmp = TempDir::new().unwrap();
        let mut dir = LazyDir::new(tmp.path().join("a/b"));
        assert!(!dir.is_created());
        assert!(!dir.path().exists());

        let path = dir.ensure().unwrap().to_path_buf();
        assert!(path.is_dir());
        assert!(dir.is_created());

        // Removing it behind the handle's back is not noticed.
        fs::remove_dir(&path).unwrap();
        dir.ensure().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn lazy_dir_tolerates_existing_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("pkg/src")).unwrap();

        let mut dir = LazyDir::new(tmp.path().join("pkg/src"));
        assert!(dir.ensure().is_ok());
    }

    #[test]
    fn lazy_dir_fails_when_a_file_is_in_the_way() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("blocker"), "").unwrap();

        let mut dir = LazyDir::new(tmp.path().join("blocker/sub"));
        assert!(dir.ensure().is_err());
        assert!(!dir.is_created());
    }
}
