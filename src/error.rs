use std::fmt;

use thiserror::Error;

/// Rejected input as it was handed to a factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidValue::Int(value) => write!(f, "{}", value),
            InvalidValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for InvalidValue {
    fn from(value: i64) -> Self {
        InvalidValue::Int(value)
    }
}

impl From<&str> for InvalidValue {
    fn from(value: &str) -> Self {
        InvalidValue::Text(value.to_string())
    }
}

/// Unified error type for semantic-version operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid major: value \"{0}\" does not appear to be valid")]
    InvalidMajor(InvalidValue),

    #[error("Invalid minor: value \"{0}\" does not appear to be valid")]
    InvalidMinor(InvalidValue),

    #[error("Invalid patch: value \"{0}\" does not appear to be valid")]
    InvalidPatch(InvalidValue),

    #[error("Invalid pre-release: value \"{0}\" does not appear to be valid")]
    InvalidPreRelease(String),

    #[error("Invalid build metadata: value \"{0}\" does not appear to be valid")]
    InvalidBuildMetaData(String),

    #[error("Invalid version: value \"{0}\" does not appear to be valid")]
    InvalidVersion(String),

    #[error(
        "Extension missing: the \"{capability}\" feature is required to perform calculations \
         for integers that are greater than \"{ceiling}\""
    )]
    ExtensionMissing {
        capability: &'static str,
        ceiling: u64,
    },
}

/// Convenience type alias for Results in semantic-version
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_major(value: impl Into<InvalidValue>) -> Self {
        Error::InvalidMajor(value.into())
    }

    pub fn invalid_minor(value: impl Into<InvalidValue>) -> Self {
        Error::InvalidMinor(value.into())
    }

    pub fn invalid_patch(value: impl Into<InvalidValue>) -> Self {
        Error::InvalidPatch(value.into())
    }

    pub fn invalid_pre_release(value: impl Into<String>) -> Self {
        Error::InvalidPreRelease(value.into())
    }

    pub fn invalid_build_meta_data(value: impl Into<String>) -> Self {
        Error::InvalidBuildMetaData(value.into())
    }

    pub fn invalid_version(value: impl Into<String>) -> Self {
        Error::InvalidVersion(value.into())
    }

    /// Arbitrary-precision arithmetic was needed but the `bigint` feature is disabled
    pub fn big_integer_missing() -> Self {
        Error::ExtensionMissing {
            capability: "bigint",
            ceiling: u64::MAX,
        }
    }

    /// The rejected input, rendered as text
    pub fn value(&self) -> Option<String> {
        match self {
            Error::InvalidMajor(value) | Error::InvalidMinor(value) | Error::InvalidPatch(value) => {
                Some(value.to_string())
            }
            Error::InvalidPreRelease(value)
            | Error::InvalidBuildMetaData(value)
            | Error::InvalidVersion(value) => Some(value.clone()),
            Error::ExtensionMissing { .. } => None,
        }
    }
}
