//! Custom validation section - runs the caller's hook.

use secrecy::{ExposeSecret, SecretString};

use super::{Formatter, SectionResult};
use crate::messages::ErrorCode;
use crate::result::Violation;
use crate::rules::{CustomOutcome, RuleSet};

/// Invokes `custom_validate`; its messages are stored as returned, without
/// going through the formatter.
pub fn custom_validate_section(password: &SecretString, rules: &RuleSet, _fmt: &Formatter<'_>) -> SectionResult {
    let validator = rules.custom_validate.as_ref()?;
    let violation = match validator.call(password.expose_secret()) {
        CustomOutcome::Pass => return None,
        CustomOutcome::Message(message) => Violation::Single(message),
        CustomOutcome::Messages(messages) => Violation::Multiple(messages),
    };
    Some((ErrorCode::CustomValidate, violation))
}
