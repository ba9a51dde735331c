/// Property queries: "is metadata tag X set on file Y?"
///
/// The scanner never talks to version control directly. Callers pass a
/// [`PropertyStore`], which is the real `svn` command in production
/// ([`SvnPropertyStore`]) and an in-memory map in tests
/// ([`MemoryPropertyStore`]).
pub mod memory;
pub mod svn;

pub use memory::MemoryPropertyStore;
pub use svn::SvnPropertyStore;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Property holding the svn keyword-expansion list.
pub const KEYWORDS_PROPERTY: &str = "svn:keywords";

/// Capability to look up a named property on a file.
///
/// A lookup that cannot be performed at all is indistinguishable from an
/// unset property; implementations return `false` in that case.
pub trait PropertyStore {
    fn has_property(&self, path: &Path, name: &str) -> bool;
}

impl<T: PropertyStore + ?Sized> PropertyStore for &T {
    fn has_property(&self, path: &Path, name: &str) -> bool {
        (**self).has_property(path, name)
    }
}

/// License property attached to every distributable source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseTag {
    /// Released under the GPL.
    Gpl,
    /// Released under the commercial license.
    Commercial,
    /// Deliberately carries no license (never packaged).
    Unlicensed,
}

impl LicenseTag {
    /// All tags, in the order the license report checks them.
    pub const ALL: [LicenseTag; 3] = [Self::Gpl, Self::Commercial, Self::Unlicensed];

    /// Tags that can be packaged by the extractor.
    pub const PACKAGEABLE: [LicenseTag; 2] = [Self::Gpl, Self::Commercial];

    /// The svn property name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gpl => "lic_gpl",
            Self::Commercial => "lic_com",
            Self::Unlicensed => "lic_no",
        }
    }

    /// `true` if files with this tag belong in a release package.
    pub fn is_packageable(self) -> bool {
        Self::PACKAGEABLE.contains(&self)
    }
}

impl fmt::Display for LicenseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known license property name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown license tag `{0}` (expected lic_gpl, lic_com or lic_no)")]
pub struct UnknownLicenseTag(pub String);

impl FromStr for LicenseTag {
    type Err = UnknownLicenseTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownLicenseTag(s.to_string()))
    }
}
