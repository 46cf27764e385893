//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is a dot-separated list of numeric and alphanumeric identifiers that
//! lowers the precedence of the version it is attached to.
//! According to semver.org: https://semver.org/#spec-item-9

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::natural::natural_cmp;
use super::numeric::compare_digits;
use crate::error::{Error, Result};

/// Numeric identifiers reject leading zeros; alphanumeric ones may start with `0`.
pub(crate) const PRE_RELEASE_PATTERN: &str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*";

static PRE_RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", PRE_RELEASE_PATTERN)).expect("pre-release pattern compiles")
});

/// A single pre-release identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// Digits only, e.g. "1" in "alpha.1"
    Numeric(&'a str),
    /// Contains a letter or hyphen, e.g. "alpha" or "0valid"
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    fn classify(value: &'a str) -> Self {
        if value.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(value)
        } else {
            Identifier::AlphaNumeric(value)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(value) | Identifier::AlphaNumeric(value) => value,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // identical text short-circuits before any classification
        if self.as_str() == other.as_str() {
            return Ordering::Equal;
        }

        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_digits(a, b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => natural_cmp(a, b),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release part of a version, e.g. "alpha.1" in "1.0.0-alpha.1"
///
/// The empty value means "no pre-release". It is only produced by [`PreRelease::empty`]
/// and ranks above every non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    value: String,
}

impl PreRelease {
    /// Parse a pre-release from a string such as "alpha", "beta.11" or "0A.is.legal"
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Parsed pre-release
    /// * `Err(Error::InvalidPreRelease)` - If any identifier is empty, contains characters
    ///   outside `[0-9A-Za-z-]`, or is numeric with a leading zero
    pub fn from_string(value: &str) -> Result<Self> {
        if !PRE_RELEASE.is_match(value) {
            tracing::debug!(value, "rejected pre-release");
            return Err(Error::invalid_pre_release(value));
        }

        Ok(PreRelease {
            value: value.to_string(),
        })
    }

    pub fn empty() -> Self {
        PreRelease::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Identifiers in order; none for the empty value
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        let present = !self.value.is_empty();
        self.value
            .split('.')
            .filter(move |_| present)
            .map(Identifier::classify)
    }

    /// Precedence comparison.
    ///
    /// Identifiers are compared pairwise from the left; the first difference decides.
    /// Numeric identifiers rank below alphanumeric ones, and a shorter list whose
    /// identifiers all match ranks below the longer one.
    /// See https://semver.org/#spec-item-11
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        let mut identifiers = self.identifiers();
        let mut other_identifiers = other.identifiers();

        loop {
            match (identifiers.next(), other_identifiers.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match a.cmp(&b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                },
            }
        }
    }

    pub fn is_smaller_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl FromStr for PreRelease {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PreRelease::from_string(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for PreRelease {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(value: &str) -> PreRelease {
        PreRelease::from_string(value).unwrap()
    }

    #[test]
    fn test_prerelease_parse_valid() {
        let values = [
            "prerelease",
            "alpha",
            "beta",
            "alpha.beta",
            "alpha.beta.1",
            "alpha.1",
            "alpha0.valid",
            "alpha.0valid",
            "alpha-a.b-c-somethinglong",
            "rc.1",
            "DEV-SNAPSHOT",
            "SNAPSHOT-123",
            "alpha.1227",
            "---RC-SNAPSHOT.12.9.1--.12",
            "---R-S.12.9.1--.12",
            "0A.is.legal",
            "0",
            "-",
        ];

        for value in values {
            assert_eq!(pr(value).as_str(), value);
        }
    }

    #[test]
    fn test_prerelease_parse_invalid() {
        let values = [
            "",
            "0123",
            "0123.0123",
            "alpha_beta",
            "alpha.",
            ".alpha",
            "alpha..",
            "alpha..1",
            "alpha...1",
            "alpha.......1",
            "-1.0.3-gamma+b7718",
            "+justmeta",
            "9.8.7+meta+meta",
            "9.8.7-whatever+meta+meta",
            "alpha ",
            "ålpha",
        ];

        for value in values {
            assert_eq!(
                PreRelease::from_string(value),
                Err(Error::invalid_pre_release(value)),
                "{:?}",
                value
            );
        }
    }

    #[test]
    fn test_prerelease_empty() {
        let empty = PreRelease::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
        assert_eq!(empty.identifiers().count(), 0);
        assert!(!pr("alpha").is_empty());
        assert!(!empty.equals(&pr("alpha")));
    }

    #[test]
    fn test_prerelease_identifiers() {
        let value = pr("alpha.1.0valid");
        let identifiers: Vec<_> = value.identifiers().collect();
        assert_eq!(
            identifiers,
            vec![
                Identifier::AlphaNumeric("alpha"),
                Identifier::Numeric("1"),
                Identifier::AlphaNumeric("0valid"),
            ]
        );
        assert!(identifiers[1].is_numeric());
    }

    #[test]
    fn test_prerelease_semver_precedence_chain() {
        let ordered = [
            "alpha",
            "alpha.1",
            "alpha.beta",
            "beta",
            "beta.2",
            "beta.11",
            "rc.1",
        ];

        for window in ordered.windows(2) {
            assert_eq!(
                pr(window[0]).compare(&pr(window[1])),
                Ordering::Less,
                "{} < {}",
                window[0],
                window[1]
            );
            assert!(pr(window[1]).is_greater_than(&pr(window[0])));
        }
    }

    #[test]
    fn test_prerelease_ordered_corpus() {
        let ordered = [
            "---R-S.12.9.1--.12",
            "---RC-SNAPSHOT.12.9.1--.12",
            "0A.is.legal",
            "DEV-SNAPSHOT",
            "SNAPSHOT-123",
            "alpha",
            "alpha.1",
            "alpha.1227",
            "alpha.beta",
            "alpha.beta.1",
            "alpha-a.b-c-somethinglong",
            "alpha0.valid",
            "beta",
            "beta.2",
            "beta.11",
            "prerelease",
            "rc.1",
        ];

        for (i, a) in ordered.iter().enumerate() {
            for (j, b) in ordered.iter().enumerate() {
                assert_eq!(
                    pr(a).compare(&pr(b)),
                    i.cmp(&j),
                    "comparing {} with {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_prerelease_numeric_smaller_than_alphanumeric() {
        assert!(pr("alpha.1").is_smaller_than(&pr("alpha.0valid")));
        assert!(pr("999").is_smaller_than(&pr("a")));
    }

    #[test]
    fn test_prerelease_numeric_beyond_u64() {
        assert!(pr("rc.18446744073709551615").is_smaller_than(&pr("rc.18446744073709551616")));
    }

    #[test]
    fn test_prerelease_natural_order_for_alphanumeric() {
        assert!(pr("rc9").is_smaller_than(&pr("rc10")));
        assert!(pr("alpha.build9").is_smaller_than(&pr("alpha.build10")));
    }

    #[test]
    fn test_prerelease_empty_ranks_above_any_value() {
        assert_eq!(
            PreRelease::empty().compare(&pr("zzz")),
            Ordering::Greater
        );
        assert_eq!(pr("0").compare(&PreRelease::empty()), Ordering::Less);
        assert_eq!(
            PreRelease::empty().compare(&PreRelease::empty()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_prerelease_equality() {
        assert!(pr("beta.1").equals(&pr("beta.1")));
        assert_eq!(pr("beta.1"), pr("beta.1"));
        assert_ne!(pr("beta.1"), pr("beta.2"));
        assert!(!pr("beta.1").is_smaller_than(&pr("beta.1")));
    }
}
