/// propscan Core: tree scanning, property queries, and package extraction.
///
/// This crate contains all business logic with zero CLI dependencies.
/// The `propscan-cli` crate turns it into the three maintenance tools.
///
/// # Modules
///
/// - [`scanner`]: Sorted, serial directory walk with name/path exclusions.
/// - [`property`]: The `PropertyStore` capability and its svn/in-memory backends.
/// - [`package`]: Release package extraction and post-processing.
/// - [`report`]: Reports of files missing a keyword or license property.
/// - [`config`]: Layered configuration (defaults, JSON file, environment).
/// - [`platform`]: Platform-specific permission handling.
/// - [`error`]: The crate's error type.
pub mod config;
pub mod error;
pub mod package;
pub mod platform;
pub mod property;
pub mod report;
pub mod scanner;

pub use config::Config;
pub use error::{Result, ScanError};
