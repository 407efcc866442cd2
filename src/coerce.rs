//! Lenient scalar coercion for query parameter values.
//!
//! None of these functions fail. Text that does not start with a number reads
//! as zero, and nested maps read as zero or one depending on whether they are
//! empty.

use crate::collection::Collection;
use crate::compat::{String, ToString};
use crate::value::QueryValue;

/// Whitespace skipped before a leading number.
fn is_numeric_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Longest numeric prefix of `input` after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent when at least one exponent digit follows. Returns the prefix and
/// whether it is a plain integer.
fn numeric_prefix(input: &str) -> Option<(&str, bool)> {
    let bytes = input.as_bytes();
    let start = bytes
        .iter()
        .position(|&b| !is_numeric_space(b))
        .unwrap_or(bytes.len());

    let mut end = start;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut integer = true;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            integer = false;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
            integer = false;
        }
    }

    Some((&input[start..end], integer))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Read the leading number of `input` as an integer.
///
/// Integer text saturates at the `i64` bounds. Text with a fraction or an
/// exponent is read as a float and truncated toward zero.
pub fn str_to_int(input: &str) -> i64 {
    match numeric_prefix(input) {
        None => 0,
        Some((prefix, true)) => prefix.parse::<i64>().unwrap_or_else(|_| {
            if prefix.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }),
        // `as` saturates and maps NaN to zero
        Some((prefix, false)) => prefix.parse::<f64>().map_or(0, |f| f as i64),
    }
}

/// Read the leading number of `input` as a float.
pub fn str_to_float(input: &str) -> f64 {
    numeric_prefix(input)
        .and_then(|(prefix, _)| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Read `input` as a flag.
///
/// False for `""`, `"0"`, and the words `false`, `off` and `no` (any case,
/// surrounding whitespace ignored). Everything else is true.
pub fn str_to_bool(input: &str) -> bool {
    if input.is_empty() || input == "0" {
        return false;
    }
    let word = input.trim();
    !["false", "off", "no"]
        .iter()
        .any(|falsy| word.eq_ignore_ascii_case(falsy))
}

pub fn to_string(value: &QueryValue) -> String {
    match value {
        QueryValue::String(s) => s.clone(),
        QueryValue::Map(_) => String::new(),
    }
}

pub fn to_int(value: &QueryValue) -> i64 {
    match value {
        QueryValue::String(s) => str_to_int(s),
        QueryValue::Map(map) => i64::from(!map.is_empty()),
    }
}

pub fn to_float(value: &QueryValue) -> f64 {
    match value {
        QueryValue::String(s) => str_to_float(s),
        QueryValue::Map(map) => f64::from(u8::from(!map.is_empty())),
    }
}

pub fn to_bool(value: &QueryValue) -> bool {
    match value {
        QueryValue::String(s) => str_to_bool(s),
        QueryValue::Map(map) => !map.is_empty(),
    }
}

/// A string becomes a one-entry map under key `0`.
pub fn to_array(value: &QueryValue) -> Collection<QueryValue> {
    match value {
        QueryValue::String(s) => Collection::from([("0", QueryValue::String(s.to_string()))]),
        QueryValue::Map(map) => map.clone(),
    }
}
