/// Argument definitions for the three tools.
///
/// Help and version flags are disabled: any deviation from the expected
/// arguments, `--help` included, is a usage error that prints the banner
/// and exits with status 1.
use clap::Parser;
use propscan_core::property::LicenseTag;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "extract-package",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ExtractArgs {
    /// License tag selecting the files to package.
    #[arg(value_parser = parse_package_tag)]
    pub tag: LicenseTag,

    /// Base directory of the new package.
    pub target_dir: PathBuf,
}

/// Arguments of the report tools: none at all.
#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ReportArgs {}

/// Accept only tags that can be packaged.
fn parse_package_tag(s: &str) -> Result<LicenseTag, String> {
    let tag: LicenseTag = s.parse().map_err(|e| format!("{e}"))?;
    if tag.is_packageable() {
        Ok(tag)
    } else {
        Err(format!("`{tag}` files are never packaged"))
    }
}

/// Parse `args` (including the program name), printing `usage` to stdout
/// and returning `None` on any error.
pub fn parse_or_usage<P, I, T>(args: I, usage: &str) -> Option<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Argument error: {e}");
            print!("{usage}");
            None
        }
    }
}
