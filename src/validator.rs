//! Rule evaluation - runs every section of a rule set in order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::messages::{ErrorCode, ErrorStrings, format_error};
use crate::result::{ValidationResult, Violation};
use crate::rules::RuleSet;
use crate::sections::{
    Formatter, Section, char_digit_section, char_lower_section, char_special_section,
    char_upper_section, custom_validate_section, length_max_section, length_min_section,
    must_contain_section, must_not_contain_section,
};

/// Sections in evaluation order; `ERR_All` follows this order.
const SECTIONS: [(&str, Section); 9] = [
    ("length_min", length_min_section),
    ("length_max", length_max_section),
    ("char_digit", char_digit_section),
    ("char_upper", char_upper_section),
    ("char_lower", char_lower_section),
    ("char_special", char_special_section),
    ("must_contain", must_contain_section),
    ("must_not_contain", must_not_contain_section),
    ("custom_validate", custom_validate_section),
];

/// Result reported when the requested policy is not registered.
///
/// Always uses the built-in message, whatever the policy tables say.
pub fn missing_policy_result() -> ValidationResult {
    let message = format_error(&ErrorStrings::defaults(), ErrorCode::NoDefinedPolicies, &[]);
    let mut result = ValidationResult::new();
    result.push(ErrorCode::NoDefinedPolicies, Violation::Single(message));
    result
}

/// Evaluates `password` against `rules`, formatting messages with the rule
/// set's own formatter or, failing that, with `table`.
///
/// Every rule runs; a failing rule never stops the following ones.
pub fn validate_rules(password: &SecretString, rules: &RuleSet, table: &ErrorStrings) -> ValidationResult {
    let fmt = Formatter::new(rules, table);
    let mut result = ValidationResult::new();

    for (_section_name, section_fn) in SECTIONS {
        if let Some((code, violation)) = section_fn(password, rules, &fmt) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Section {} failed with {}", _section_name, code);
            result.push(code, violation);
        }
    }

    result
}

/// Like [`validate_rules`], but checks `token` before each section.
///
/// Returns `None` when the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn validate_rules_cancellable(
    password: &SecretString,
    rules: &RuleSet,
    table: &ErrorStrings,
    token: Option<&CancellationToken>,
) -> Option<ValidationResult> {
    let fmt = Formatter::new(rules, table);
    let mut result = ValidationResult::new();

    for (_section_name, section_fn) in SECTIONS {
        if token.is_some_and(CancellationToken::is_cancelled) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Validation cancelled before section {}", _section_name);
            return None;
        }
        if let Some((code, violation)) = section_fn(password, rules, &fmt) {
            result.push(code, violation);
        }
    }

    Some(result)
}
