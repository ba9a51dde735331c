/// Entry points for the three binaries.
///
/// Each `run_*` takes the raw process arguments (program name first) and
/// returns the exit code. Usage errors print the banner and yield
/// status 1; fatal errors are returned to `main`, which prints the error
/// chain and also exits with status 1.
use crate::args::{parse_or_usage, ExtractArgs, ReportArgs};
use crate::usage::{EXTRACT_USAGE, MISSING_KEYWORDS_USAGE, MISSING_LICENSE_USAGE};
use anyhow::Context;
use propscan_core::package::{build_package, version};
use propscan_core::property::SvnPropertyStore;
use propscan_core::report::{find_missing_keywords, find_missing_license};
use propscan_core::Config;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Exit status for usage errors.
const USAGE_EXIT: u8 = 1;

/// The tools always operate on the current directory.
const SOURCE_ROOT: &str = ".";

fn load_config() -> anyhow::Result<Config> {
    let config = Config::from_env().context("failed to load configuration")?;
    info!("Using `{}` for property queries", config.svn_command);
    Ok(config)
}

/// `extract-package <TAG> <TARGETDIR>`
pub fn run_extract<I, T>(args: I) -> anyhow::Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some(args) = parse_or_usage::<ExtractArgs, _, _>(args, EXTRACT_USAGE) else {
        return Ok(ExitCode::from(USAGE_EXIT));
    };

    let config = load_config()?;
    let store = SvnPropertyStore::new(config.svn_command.as_str());

    let summary = build_package(
        Path::new(SOURCE_ROOT),
        &args.target_dir,
        args.tag,
        &store,
        // Vendored sources are shipped like everything else.
        &config.exclusions.names_only(),
        version::today(),
    )
    .with_context(|| format!("failed to build package in {}", args.target_dir.display()))?;

    info!(
        "extract-package finished: {} files copied in {:?}",
        summary.files_copied, summary.scan.duration
    );
    Ok(ExitCode::SUCCESS)
}

/// `find-missing-keywords`
pub fn run_missing_keywords<I, T>(args: I) -> anyhow::Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if parse_or_usage::<ReportArgs, _, _>(args, MISSING_KEYWORDS_USAGE).is_none() {
        return Ok(ExitCode::from(USAGE_EXIT));
    }

    let config = load_config()?;
    let store = SvnPropertyStore::new(config.svn_command.as_str());
    let mut stdout = std::io::stdout().lock();

    find_missing_keywords(Path::new(SOURCE_ROOT), &store, &config.exclusions, &mut stdout)
        .context("keyword scan failed")?;
    Ok(ExitCode::SUCCESS)
}

/// `find-missing-license`
pub fn run_missing_license<I, T>(args: I) -> anyhow::Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if parse_or_usage::<ReportArgs, _, _>(args, MISSING_LICENSE_USAGE).is_none() {
        return Ok(ExitCode::from(USAGE_EXIT));
    }

    let config = load_config()?;
    let store = SvnPropertyStore::new(config.svn_command.as_str());
    let mut stdout = std::io::stdout().lock();

    find_missing_license(
        Path::new(SOURCE_ROOT),
        &store,
        &config.exclusions.names_only(),
        &mut stdout,
    )
        .context("license scan failed")?;
    Ok(ExitCode::SUCCESS)
}
