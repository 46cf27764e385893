use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::build_metadata::{BuildMetaData, BUILD_META_DATA_PATTERN};
use super::numeric::{Major, Minor, Patch};
use super::prerelease::{PreRelease, PRE_RELEASE_PATTERN};
use crate::error::{Error, Result};

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        concat!(
            r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
            r"(?:-(?P<prerelease>{}))?",
            r"(?:\+(?P<buildmetadata>{}))?$",
        ),
        PRE_RELEASE_PATTERN, BUILD_META_DATA_PATTERN
    ))
    .expect("version pattern compiles")
});

/// Semantic version representation
///
/// Keeps the text it was parsed from, so `to_string()` returns the input verbatim.
///
/// Equality (`==`, [`Version::equals`]) is textual identity and therefore sees build
/// metadata. Precedence ([`Version::compare`], [`Version::has_same_precedence_as`])
/// ignores it. Because the two disagree, `Version` does not implement `Ord`; sort with
/// [`Version::sort_by_precedence`] or `sort_by(Version::compare)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: Major,
    minor: Minor,
    patch: Patch,
    pre_release: PreRelease,
    build_meta_data: BuildMetaData,
    value: String,
}

impl Version {
    /// Parse a version such as "1.2.3", "1.0.0-rc.1" or "2.0.0+build.1848"
    ///
    /// Surrounding whitespace, a `v` prefix, missing components and leading zeros are
    /// all rejected with [`Error::InvalidVersion`].
    pub fn from_string(value: &str) -> Result<Self> {
        let captures = match VERSION.captures(value) {
            Some(captures) => captures,
            None => {
                tracing::debug!(value, "rejected version");
                return Err(Error::invalid_version(value));
            }
        };

        let pre_release = match captures.name("prerelease") {
            Some(m) if !m.as_str().is_empty() => PreRelease::from_string(m.as_str())?,
            _ => PreRelease::empty(),
        };

        let build_meta_data = match captures.name("buildmetadata") {
            Some(m) if !m.as_str().is_empty() => BuildMetaData::from_string(m.as_str())?,
            _ => BuildMetaData::empty(),
        };

        let version = Version {
            major: Major::from_string(&captures["major"])?,
            minor: Minor::from_string(&captures["minor"])?,
            patch: Patch::from_string(&captures["patch"])?,
            pre_release,
            build_meta_data,
            value: value.to_string(),
        };

        tracing::trace!(version = %version, "parsed version");
        Ok(version)
    }

    /// Assemble a version from already validated components
    pub fn from_parts(
        major: Major,
        minor: Minor,
        patch: Patch,
        pre_release: PreRelease,
        build_meta_data: BuildMetaData,
    ) -> Self {
        let mut value = format!("{}.{}.{}", major, minor, patch);
        if !pre_release.is_empty() {
            value.push('-');
            value.push_str(pre_release.as_str());
        }
        if !build_meta_data.is_empty() {
            value.push('+');
            value.push_str(build_meta_data.as_str());
        }

        Version {
            major,
            minor,
            patch,
            pre_release,
            build_meta_data,
            value,
        }
    }

    pub fn major(&self) -> &Major {
        &self.major
    }

    pub fn minor(&self) -> &Minor {
        &self.minor
    }

    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    pub fn build_meta_data(&self) -> &BuildMetaData {
        &self.build_meta_data
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Next major release: major + 1, minor and patch reset, suffixes dropped
    ///
    /// See https://semver.org/#spec-item-8
    pub fn bump_major(&self) -> Result<Self> {
        Ok(Version::from_parts(
            self.major.bump()?,
            Minor::zero(),
            Patch::zero(),
            PreRelease::empty(),
            BuildMetaData::empty(),
        ))
    }

    /// Next minor release: minor + 1, patch reset, suffixes dropped
    ///
    /// See https://semver.org/#spec-item-7
    pub fn bump_minor(&self) -> Result<Self> {
        Ok(Version::from_parts(
            self.major.clone(),
            self.minor.bump()?,
            Patch::zero(),
            PreRelease::empty(),
            BuildMetaData::empty(),
        ))
    }

    /// Next patch release: patch + 1, suffixes dropped
    ///
    /// See https://semver.org/#spec-item-6
    pub fn bump_patch(&self) -> Result<Self> {
        Ok(Version::from_parts(
            self.major.clone(),
            self.minor.clone(),
            self.patch.bump()?,
            PreRelease::empty(),
            BuildMetaData::empty(),
        ))
    }

    /// Bump according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        match bump_type {
            VersionBump::Major => self.bump_major(),
            VersionBump::Minor => self.bump_minor(),
            VersionBump::Patch => self.bump_patch(),
        }
    }

    /// Precedence comparison; build metadata never participates
    ///
    /// See https://semver.org/#spec-item-11
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major
            .compare(&other.major)
            .then_with(|| self.minor.compare(&other.minor))
            .then_with(|| self.patch.compare(&other.patch))
            .then_with(|| self.pre_release.compare(&other.pre_release))
    }

    pub fn is_smaller_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Textual identity, so "1.0.0+a" and "1.0.0+b" are not equal
    pub fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }

    /// Equal precedence, so "1.0.0+a" and "1.0.0+b" are the same
    pub fn has_same_precedence_as(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Stable sort, lowest precedence first
    pub fn sort_by_precedence(versions: &mut [Version]) {
        versions.sort_by(Version::compare);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::from_string(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Version::from_string(value)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Version bump type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl FromStr for VersionBump {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(format!("unknown bump type '{}'", other)),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}
