/// propscan CLI: argument handling, logging and entry points for the
/// three maintenance tools.
///
/// This crate contains all command-line code. Business logic lives in
/// `propscan-core`.
pub mod app;
pub mod args;
pub mod logging;
pub mod usage;

pub use app::{run_extract, run_missing_keywords, run_missing_license};
