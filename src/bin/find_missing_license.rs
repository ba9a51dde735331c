//! find-missing-license: list files without a license tag.
//!
//! Thin binary entry point. All logic lives in the `propscan-core`
//! and `propscan-cli` crates.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    propscan_cli::logging::init();
    propscan_cli::run_missing_license(std::env::args_os())
}
