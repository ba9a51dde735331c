/// Post-extraction fixups applied to a freshly built package directory.
///
/// Each step requires its target to exist. A missing file is fatal and
/// leaves the package half-finished.
use super::version::{render_version_header, version_string, VERSION_HEADER_PATH};
use crate::error::{Result, ScanError};
use crate::platform;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config templates shipped as `<name>.default` and renamed to `<name>`.
pub const CONFIG_TEMPLATES: [&str; 3] = [
    "makeMakefile.config",
    "makeVCProj.config",
    "makeVCXProj.config",
];

/// Suffix stripped from each config template.
pub const TEMPLATE_SUFFIX: &str = ".default";

/// Build script that must be executable in the package.
pub const BUILD_SCRIPT: &str = "makeMakefile.sh";

/// `rwxr--r--`
pub const BUILD_SCRIPT_MODE: u32 = 0o744;

/// Run every fixup step against `target`, stamping the version for `date`.
///
/// Returns the path of the written version header.
pub fn finalize_package(target: &Path, date: NaiveDate) -> Result<PathBuf> {
    rename_config_templates(target)?;
    platform::set_mode(&target.join(BUILD_SCRIPT), BUILD_SCRIPT_MODE)?;
    let header = write_version_header(target, date)?;
    info!("Package {} finalized", target.display());
    Ok(header)
}

/// Rename every `<template>.default` in `target` to `<template>`.
pub fn rename_config_templates(target: &Path) -> Result<()> {
    for template in CONFIG_TEMPLATES {
        let from = target.join(format!("{template}{TEMPLATE_SUFFIX}"));
        let to = target.join(template);
        fs::rename(&from, &to).map_err(|e| ScanError::io("cannot rename", &from, e))?;
        debug!("Renamed {} -> {}", from.display(), to.display());
    }
    Ok(())
}

/// Write (or overwrite) the version header below `target`.
///
/// The header's directory is not created; it must have been populated by
/// the extraction.
pub fn write_version_header(target: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = target.join(VERSION_HEADER_PATH);
    let version = version_string(date);
    fs::write(&path, render_version_header(&version))
        .map_err(|e| ScanError::io("cannot write", &path, e))?;
    info!("Wrote version {version} to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package_skeleton(target: &Path) {
        for template in CONFIG_TEMPLATES {
            fs::write(target.join(format!("{template}.default")), template).unwrap();
        }
        fs::write(target.join(BUILD_SCRIPT), "#!/bin/sh\n").unwrap();
        fs::create_dir_all(target.join("include/ogdf/internal")).unwrap();
    }

    #[test]
    fn templates_are_renamed_with_content_intact() {
        let tmp = TempDir::new().unwrap();
        package_skeleton(tmp.path());

        rename_config_templates(tmp.path()).unwrap();

        for template in CONFIG_TEMPLATES {
            assert!(!tmp.path().join(format!("{template}.default")).exists());
            assert_eq!(
                fs::read_to_string(tmp.path().join(template)).unwrap(),
                template
            );
        }
    }

    #[test]
    fn missing_template_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = rename_config_templates(tmp.path()).unwrap_err();
        assert!(
            err.to_string().contains("makeMakefile.config.default"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn version_header_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        package_skeleton(tmp.path());
        let header = tmp.path().join(VERSION_HEADER_PATH);
        fs::write(&header, "stale").unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let written = write_version_header(tmp.path(), date).unwrap();

        assert_eq!(written, header);
        let text = fs::read_to_string(&header).unwrap();
        assert!(text.contains("#define OGDF_VERSION \"2024.03\""));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn version_header_needs_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(write_version_header(tmp.path(), date).is_err());
        assert!(!tmp.path().join("include").exists());
    }

    #[test]
    fn finalize_runs_every_step() {
        let tmp = TempDir::new().unwrap();
        package_skeleton(tmp.path());

        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        finalize_package(tmp.path(), date).unwrap();

        assert!(tmp.path().join("makeMakefile.config").exists());
        assert!(tmp.path().join("makeVCXProj.config").exists());
        assert!(tmp.path().join(VERSION_HEADER_PATH).exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join(BUILD_SCRIPT))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, BUILD_SCRIPT_MODE);
        }
    }
}
