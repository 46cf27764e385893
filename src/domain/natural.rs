//! Natural ordering for alphanumeric identifiers
//!
//! Bytes compare as bytes, case-sensitively and independent of locale. Runs of ASCII
//! digits compare by magnitude, so `rc9 < rc10`.

use std::cmp::Ordering;

use super::numeric::compare_digits;

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset)
}

fn compare_runs(a: &str, b: &str) -> Ordering {
    compare_digits(a.trim_start_matches('0'), b.trim_start_matches('0'))
}

/// Compare two identifiers in natural order.
///
/// Digit runs of equal magnitude (`01` and `1`) fall through; if nothing else decides,
/// the whole identifiers are compared byte-wise so only identical text is `Equal`.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a_bytes, b_bytes) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a_bytes.len() && j < b_bytes.len() {
        let (x, y) = (a_bytes[i], b_bytes[j]);

        if x.is_ascii_digit() && y.is_ascii_digit() {
            let a_end = digit_run_end(a_bytes, i);
            let b_end = digit_run_end(b_bytes, j);

            match compare_runs(&a[i..a_end], &b[j..b_end]) {
                Ordering::Equal => {
                    i = a_end;
                    j = b_end;
                }
                ord => return ord,
            }
        } else {
            match x.cmp(&y) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                ord => return ord,
            }
        }
    }

    (a_bytes.len() - i)
        .cmp(&(b_bytes.len() - j))
        .then_with(|| a.cmp(b))
}
