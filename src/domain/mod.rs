//! Domain logic - immutable SemVer 2.0.0 value types

pub mod build_metadata;
mod natural;
pub mod numeric;
pub mod prerelease;
pub mod version;

pub use build_metadata::BuildMetaData;
pub use numeric::{Major, Minor, Patch};
pub use prerelease::{Identifier, PreRelease};
pub use version::{Version, VersionBump};
