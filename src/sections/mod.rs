//! Password policy sections
//!
//! Each section checks one rule of a [`RuleSet`] and reports the violation,
//! if any, with its already formatted message(s).

mod contains;
mod custom;
mod length;
mod special;
mod variety;

pub use contains::{must_contain_section, must_not_contain_section};
pub use custom::custom_validate_section;
pub use length::{length_max_section, length_min_section};
pub use special::char_special_section;
pub use variety::{char_digit_section, char_lower_section, char_upper_section};

use secrecy::SecretString;

use crate::messages::{ErrorCode, ErrorStrings, format_error};
use crate::result::Violation;
use crate::rules::{ErrorFormatter, RuleSet};

/// Result type for section functions.
/// - `Some((code, violation))` - Rule failed
/// - `None` - Rule passed or is not configured
pub type SectionResult = Option<(ErrorCode, Violation)>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &RuleSet, &Formatter<'_>) -> SectionResult;

/// Builds messages either through the rule set's own formatter or through
/// the policy's error-string table.
pub struct Formatter<'a> {
    custom: Option<&'a ErrorFormatter>,
    table: &'a ErrorStrings,
}

impl<'a> Formatter<'a> {
    pub fn new(rules: &'a RuleSet, table: &'a ErrorStrings) -> Self {
        Self {
            custom: rules.error_string_format.as_ref(),
            table,
        }
    }

    pub fn format(&self, code: ErrorCode, values: &[String]) -> String {
        match self.custom {
            Some(f) => f.call(code, values),
            None => format_error(self.table, code, values),
        }
    }
}

/// Single-message violation for a threshold rule.
fn threshold_violation(code: ErrorCode, threshold: usize, fmt: &Formatter<'_>) -> SectionResult {
    Some((
        code,
        Violation::Single(fmt.format(code, &[threshold.to_string()])),
    ))
}
