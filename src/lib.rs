//! Parse, validate, compare and increment Semantic Versioning 2.0.0 versions.
//!
//! ```
//! use semantic_version::Version;
//!
//! let version = Version::from_string("1.0.0-rc.1+build.7")?;
//! assert!(version.is_smaller_than(&Version::from_string("1.0.0")?));
//! assert_eq!(version.bump_minor()?.to_string(), "1.1.0");
//! # Ok::<(), semantic_version::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;

pub use domain::{BuildMetaData, Identifier, Major, Minor, Patch, PreRelease, Version, VersionBump};
pub use error::{Error, InvalidValue, Result};
