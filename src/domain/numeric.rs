//! Numeric version components: major, minor and patch
//!
//! Values are stored as their canonical decimal digit string, so numbers wider than
//! `u64` survive parsing, comparison and increment without losing precision.
//! According to semver.org: https://semver.org/#spec-item-2

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0|[1-9][0-9]*)$").expect("number pattern compiles"));

/// Whether `value` is a non-negative decimal number without leading zeros
pub(crate) fn is_number(value: &str) -> bool {
    NUMBER.is_match(value)
}

/// Orders two canonical digit strings by magnitude.
///
/// Canonical strings carry no leading zeros, so the longer one is larger and equal
/// lengths compare digit by digit.
pub(crate) fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Adds one to a canonical digit string.
///
/// Stays on `u64` while it can and promotes to arbitrary precision at the ceiling.
fn increment(value: &str) -> Result<String> {
    match value.parse::<u64>() {
        Ok(n) if n < u64::MAX => Ok((n + 1).to_string()),
        _ => increment_big(value),
    }
}

#[cfg(feature = "bigint")]
fn increment_big(value: &str) -> Result<String> {
    use num_bigint::BigUint;

    tracing::debug!(value, "promoting increment to arbitrary precision");

    // digits were validated on construction
    let digits: Vec<u8> = value.bytes().map(|b| b - b'0').collect();
    let parsed = BigUint::from_radix_be(&digits, 10).ok_or_else(Error::big_integer_missing)?;
    Ok((parsed + 1u32).to_str_radix(10))
}

#[cfg(not(feature = "bigint"))]
fn increment_big(value: &str) -> Result<String> {
    tracing::debug!(value, "arbitrary-precision increment requested without bigint");
    Err(Error::big_integer_missing())
}

macro_rules! numeric_component {
    ($(#[$meta:meta])* $name:ident, $invalid:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Create from an integer, rejecting negative values
            pub fn from_int(value: i64) -> Result<Self> {
                if value < 0 {
                    tracing::debug!(component = stringify!($name), value, "rejected negative value");
                    return Err($invalid(value));
                }

                Ok($name(value.to_string()))
            }

            /// Create from a decimal string such as `"0"` or `"42"`.
            ///
            /// Leading zeros, signs, whitespace and non-ASCII digits are rejected. The
            /// string is kept verbatim, whatever its magnitude.
            pub fn from_string(value: &str) -> Result<Self> {
                if !is_number(value) {
                    tracing::debug!(component = stringify!($name), value, "rejected value");
                    return Err($invalid(value));
                }

                Ok($name(value.to_string()))
            }

            pub(crate) fn zero() -> Self {
                $name("0".to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The value as `u64`, if it fits
            pub fn to_u64(&self) -> Option<u64> {
                self.0.parse().ok()
            }

            /// Return a new value one greater than this one
            ///
            /// Fails with [`Error::ExtensionMissing`] when the increment needs arbitrary
            /// precision and the `bigint` feature is disabled.
            pub fn bump(&self) -> Result<Self> {
                Ok($name(increment(&self.0)?))
            }

            /// Numeric comparison, valid for any magnitude
            pub fn compare(&self, other: &Self) -> Ordering {
                compare_digits(&self.0, &other.0)
            }

            pub fn is_smaller_than(&self, other: &Self) -> bool {
                self.compare(other) == Ordering::Less
            }

            pub fn is_greater_than(&self, other: &Self) -> bool {
                self.compare(other) == Ordering::Greater
            }

            pub fn equals(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $name::from_string(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.compare(other)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

numeric_component!(
    /// Major version number (X in X.Y.Z)
    Major,
    Error::invalid_major
);

numeric_component!(
    /// Minor version number (Y in X.Y.Z)
    Minor,
    Error::invalid_minor
);

numeric_component!(
    /// Patch version number (Z in X.Y.Z)
    Patch,
    Error::invalid_patch
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidValue;

    const INVALID: &[&str] = &[
        "", " 1", "1 ", "-1", "+1", "01", "00", "1.0", "1e3", "a", "１", "٣",
    ];

    #[test]
    fn test_from_int_rejects_negative() {
        assert_eq!(
            Major::from_int(-1),
            Err(Error::InvalidMajor(InvalidValue::Int(-1)))
        );
        assert_eq!(
            Minor::from_int(i64::MIN),
            Err(Error::InvalidMinor(InvalidValue::Int(i64::MIN)))
        );
        assert_eq!(
            Patch::from_int(-42),
            Err(Error::InvalidPatch(InvalidValue::Int(-42)))
        );
    }

    #[test]
    fn test_from_int() {
        assert_eq!(Major::from_int(0).unwrap().as_str(), "0");
        assert_eq!(Minor::from_int(17).unwrap().as_str(), "17");
        assert_eq!(
            Patch::from_int(i64::MAX).unwrap().to_string(),
            i64::MAX.to_string()
        );
    }

    #[test]
    fn test_from_string_rejects_invalid() {
        for value in INVALID {
            assert_eq!(
                Major::from_string(value),
                Err(Error::invalid_major(*value)),
                "{:?}",
                value
            );
            assert!(matches!(
                Minor::from_string(value),
                Err(Error::InvalidMinor(_))
            ));
            assert!(matches!(
                Patch::from_string(value),
                Err(Error::InvalidPatch(_))
            ));
        }
    }

    #[test]
    fn test_from_string_keeps_value_verbatim() {
        let huge = "99999999999999999999999";
        assert_eq!(Major::from_string(huge).unwrap().as_str(), huge);
        assert_eq!(Patch::from_string("0").unwrap().as_str(), "0");
        assert_eq!(Minor::from_string("10").unwrap().to_u64(), Some(10));
        assert_eq!(Major::from_string(huge).unwrap().to_u64(), None);
    }

    #[test]
    fn test_parse_via_from_str() {
        let minor: Minor = "3".parse().unwrap();
        assert_eq!(minor, Minor::from_int(3).unwrap());
        assert!("03".parse::<Minor>().is_err());
    }

    #[test]
    fn test_bump() {
        assert_eq!(Major::from_int(0).unwrap().bump().unwrap().as_str(), "1");
        assert_eq!(Minor::from_int(9).unwrap().bump().unwrap().as_str(), "10");
        assert_eq!(Patch::from_int(99).unwrap().bump().unwrap().as_str(), "100");
    }

    #[test]
    fn test_bump_does_not_modify_receiver() {
        let patch = Patch::from_int(4).unwrap();
        let bumped = patch.bump().unwrap();
        assert_eq!(patch.as_str(), "4");
        assert_eq!(bumped.as_str(), "5");
    }

    #[test]
    fn test_bump_i64_max_stays_native() {
        let patch = Patch::from_int(i64::MAX).unwrap();
        assert_eq!(patch.bump().unwrap().as_str(), "9223372036854775808");
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bump_u64_max_promotes_to_big_integer() {
        let patch = Patch::from_string(&u64::MAX.to_string()).unwrap();
        assert_eq!(patch.bump().unwrap().as_str(), "18446744073709551616");

        let major = Major::from_string("99999999999999999999999").unwrap();
        assert_eq!(major.bump().unwrap().as_str(), "100000000000000000000000");
    }

    #[cfg(not(feature = "bigint"))]
    #[test]
    fn test_bump_u64_max_without_big_integer_fails() {
        let patch = Patch::from_string(&u64::MAX.to_string()).unwrap();
        assert_eq!(patch.bump(), Err(Error::big_integer_missing()));

        let below = Patch::from_string(&(u64::MAX - 1).to_string()).unwrap();
        assert_eq!(below.bump().unwrap().as_str(), u64::MAX.to_string());
    }

    #[test]
    fn test_compare_is_numeric_not_lexicographic() {
        let nine = Major::from_string("9").unwrap();
        let ten = Major::from_string("10").unwrap();
        assert_eq!(nine.compare(&ten), Ordering::Less);
        assert_eq!(ten.compare(&nine), Ordering::Greater);
        assert!(nine.is_smaller_than(&ten));
        assert!(ten.is_greater_than(&nine));
        assert!(nine < ten);
    }

    #[test]
    fn test_compare_beyond_u64() {
        let small = Patch::from_string("18446744073709551615").unwrap();
        let big = Patch::from_string("18446744073709551616").unwrap();
        let bigger = Patch::from_string("99999999999999999999999").unwrap();
        assert!(small < big);
        assert!(big < bigger);
        assert_eq!(bigger.compare(&bigger.clone()), Ordering::Equal);
    }

    #[test]
    fn test_equals() {
        let a = Minor::from_int(5).unwrap();
        let b = Minor::from_string("5").unwrap();
        let c = Minor::from_int(6).unwrap();
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(!a.is_smaller_than(&b));
        assert!(!a.is_greater_than(&b));
    }

    #[test]
    fn test_compare_digits() {
        assert_eq!(compare_digits("0", "0"), Ordering::Equal);
        assert_eq!(compare_digits("2", "11"), Ordering::Less);
        assert_eq!(compare_digits("12", "11"), Ordering::Greater);
    }
}
