use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

pub(crate) const BUILD_META_DATA_PATTERN: &str = r"[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*";

static BUILD_META_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", BUILD_META_DATA_PATTERN))
        .expect("build metadata pattern compiles")
});

/// Build metadata, e.g. "build.1848" in "2.0.0+build.1848"
///
/// Carries no precedence and does not implement `Ord`.
/// See https://semver.org/#spec-item-10
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetaData {
    value: String,
}

impl BuildMetaData {
    /// Parse build metadata; every dot-separated identifier must match `[0-9A-Za-z-]+`
    pub fn from_string(value: &str) -> Result<Self> {
        if !BUILD_META_DATA.is_match(value) {
            tracing::debug!(value, "rejected build metadata");
            return Err(Error::invalid_build_meta_data(value));
        }

        Ok(BuildMetaData {
            value: value.to_string(),
        })
    }

    pub fn empty() -> Self {
        BuildMetaData::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.value.split('.').filter(|segment| !segment.is_empty())
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl FromStr for BuildMetaData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BuildMetaData::from_string(s)
    }
}

impl fmt::Display for BuildMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for BuildMetaData {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
