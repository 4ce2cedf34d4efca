//! Special character section - counts characters from the configured set.

use secrecy::{ExposeSecret, SecretString};

use super::{Formatter, SectionResult};
use crate::messages::ErrorCode;
use crate::result::Violation;
use crate::rules::RuleSet;

/// Checks `char_special_min` against the characters of `char_special`.
///
/// The set is a literal character class: every character in it counts,
/// whatever meaning it would have in a pattern. Digits never count as
/// special, even when listed, so they stay the business of `char_digit_min`.
/// Skipped unless the minimum is positive and the set non-empty.
pub fn char_special_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    let min = rules.char_special_min.filter(|&m| m > 0)?;
    let set = rules.char_special.as_deref().filter(|s| !s.is_empty())?;

    let count = password
        .expose_secret()
        .chars()
        .filter(|c| !c.is_ascii_digit() && set.contains(*c))
        .count();

    if count < min {
        let message = fmt.format(ErrorCode::CharSpecial, &[min.to_string(), set.to_string()]);
        return Some((ErrorCode::CharSpecial, Violation::Single(message)));
    }
    None
}
