//! Phone number classification for "call" targets

use once_cell::sync::Lazy;
use regex::Regex;

use super::outcome::DialTarget;

static NON_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]+").expect("non-digit pattern is valid"));

/// Strip everything but ASCII digits
pub fn digits_only(text: &str) -> String {
    NON_DIGITS.replace_all(text, "").into_owned()
}

/// Decide whether the text after "call" is a number or a contact name.
///
/// It is a number when it carries at least `min_digits` digits once
/// separators and other characters are removed. No country-code handling
/// and no upper bound.
pub fn classify(target: &str, min_digits: usize) -> DialTarget {
    let digits = digits_only(target);
    if !digits.is_empty() && digits.len() >= min_digits {
        DialTarget::Number(digits)
    } else {
        DialTarget::Contact(target.to_string())
    }
}
