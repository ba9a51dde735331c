/// Platform-specific functionality: file permission changes.

pub mod permissions;

pub use permissions::set_mode;
