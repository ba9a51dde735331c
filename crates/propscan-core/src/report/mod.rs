/// Reports of files that lack a required property.
///
/// Paths are written to the sink as soon as they are found, one per line,
/// in scan order. The same paths are also returned to the caller.
use crate::error::{Result, ScanError};
use crate::property::{LicenseTag, PropertyStore, KEYWORDS_PROPERTY};
use crate::scanner::{scan, ExclusionRules, ScanSummary};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directories checked by the keyword report, relative to the base.
pub const KEYWORD_ROOTS: [&str; 2] = ["include", "src"];

/// Files found to be missing a property, plus per-root scan counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingReport {
    pub missing: Vec<PathBuf>,
    pub scans: Vec<ScanSummary>,
}

impl MissingReport {
    /// Total files inspected across all roots.
    pub fn files_checked(&self) -> u64 {
        self.scans.iter().map(|s| s.files_visited).sum()
    }
}

/// Scan each root in order and report every file for which `is_satisfied`
/// returns `false`.
pub fn report_missing<W, F>(
    roots: &[PathBuf],
    rules: &ExclusionRules,
    out: &mut W,
    mut is_satisfied: F,
) -> Result<MissingReport>
where
    W: Write + ?Sized,
    F: FnMut(&Path) -> bool,
{
    let mut report = MissingReport::default();

    for root in roots {
        let summary = scan(root, rules, |entry| {
            if is_satisfied(&entry.path) {
                return Ok(false);
            }
            writeln!(out, "{}", entry.path.display()).map_err(ScanError::Report)?;
            report.missing.push(entry.path.clone());
            Ok(true)
        })?;
        report.scans.push(summary);
    }

    out.flush().map_err(ScanError::Report)?;
    Ok(report)
}

/// Report files under `base/include` and `base/src` without `svn:keywords`.
pub fn find_missing_keywords<S, W>(
    base: &Path,
    store: &S,
    rules: &ExclusionRules,
    out: &mut W,
) -> Result<MissingReport>
where
    S: PropertyStore + ?Sized,
    W: Write + ?Sized,
{
    let roots: Vec<PathBuf> = KEYWORD_ROOTS.iter().map(|r| base.join(r)).collect();
    let report = report_missing(&roots, rules, out, |path| {
        store.has_property(path, KEYWORDS_PROPERTY)
    })?;
    info!(
        "{} of {} files lack {KEYWORDS_PROPERTY}",
        report.missing.len(),
        report.files_checked()
    );
    Ok(report)
}

/// Report files under `base` that carry none of the license tags.
///
/// Tags are checked in [`LicenseTag::ALL`] order and the search stops at
/// the first one found.
pub fn find_missing_license<S, W>(
    base: &Path,
    store: &S,
    rules: &ExclusionRules,
    out: &mut W,
) -> Result<MissingReport>
where
    S: PropertyStore + ?Sized,
    W: Write + ?Sized,
{
    let roots = [base.to_path_buf()];
    let report = report_missing(&roots, rules, out, |path| {
        LicenseTag::ALL
            .iter()
            .any(|tag| store.has_property(path, tag.as_str()))
    })?;
    info!(
        "{} of {} files have no license tag",
        report.missing.len(),
        report.files_checked()
    );
    Ok(report)
}
