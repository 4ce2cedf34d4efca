//! Length sections - check password minimum and maximum length.

use secrecy::{ExposeSecret, SecretString};

use super::{Formatter, SectionResult, threshold_violation};
use crate::messages::ErrorCode;
use crate::rules::RuleSet;

/// Length is measured in Unicode scalar values, not bytes.
fn char_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Fails when the password is shorter than `length_min`.
pub fn length_min_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    let min = rules.length_min?;
    if char_len(password) < min {
        return threshold_violation(ErrorCode::LengthMin, min, fmt);
    }
    None
}

/// Fails when the password is longer than `length_max`.
pub fn length_max_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    let max = rules.length_max?;
    if char_len(password) > max {
        return threshold_violation(ErrorCode::LengthMax, max, fmt);
    }
    None
}
