//! Character variety sections - check digit, uppercase and lowercase minimums.

use secrecy::{ExposeSecret, SecretString};

use super::{Formatter, SectionResult, threshold_violation};
use crate::messages::ErrorCode;
use crate::rules::RuleSet;

fn count_matching(password: &SecretString, pred: impl Fn(&char) -> bool) -> usize {
    password.expose_secret().chars().filter(pred).count()
}

fn class_section(
    password: &SecretString,
    min: Option<usize>,
    code: ErrorCode,
    pred: impl Fn(&char) -> bool,
    fmt: &Formatter<'_>,
) -> SectionResult {
    let min = min?;
    if count_matching(password, pred) < min {
        return threshold_violation(code, min, fmt);
    }
    None
}

/// Counts ASCII digits against `char_digit_min`.
pub fn char_digit_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    class_section(
        password,
        rules.char_digit_min,
        ErrorCode::CharDigitMin,
        char::is_ascii_digit,
        fmt,
    )
}

/// Counts ASCII uppercase letters against `char_upper_min`.
pub fn char_upper_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    class_section(
        password,
        rules.char_upper_min,
        ErrorCode::CharUpperMin,
        char::is_ascii_uppercase,
        fmt,
    )
}

/// Counts ASCII lowercase letters against `char_lower_min`.
pub fn char_lower_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    class_section(
        password,
        rules.char_lower_min,
        ErrorCode::CharLowerMin,
        char::is_ascii_lowercase,
        fmt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ErrorStrings;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_digit_section_missing_digits() {
        let rules = RuleSet::new().with_char_digit_min(2);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        let result = char_digit_section(&pwd("abcdef1"), &rules, &fmt);
        assert!(matches!(result, Some((ErrorCode::CharDigitMin, _))));
        assert_eq!(char_digit_section(&pwd("abcdef123"), &rules, &fmt), None);
    }

    #[test]
    fn test_upper_section_missing_uppercase() {
        let rules = RuleSet::new().with_char_upper_min(1);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        let result = char_upper_section(&pwd("abcdef123"), &rules, &fmt);
        assert!(matches!(result, Some((ErrorCode::CharUpperMin, _))));
        if let Some((_, violation)) = result {
            assert_eq!(violation.as_single(), Some("at least 1 of upper case character"));
        }
    }

    #[test]
    fn test_upper_section_ignores_non_ascii_uppercase() {
        let rules = RuleSet::new().with_char_upper_min(1);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        let result = char_upper_section(&pwd("ÄÖÜabc"), &rules, &fmt);
        assert!(matches!(result, Some((ErrorCode::CharUpperMin, _))));
    }

    #[test]
    fn test_lower_section_missing_lowercase() {
        let rules = RuleSet::new().with_char_lower_min(1);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        let result = char_lower_section(&pwd("ABCDEF123"), &rules, &fmt);
        assert!(matches!(result, Some((ErrorCode::CharLowerMin, _))));
    }

    #[test]
    fn test_variety_sections_all_categories() {
        let rules = RuleSet::new()
            .with_char_digit_min(1)
            .with_char_upper_min(2)
            .with_char_lower_min(2);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);
        let password = pwd("ABCDEF123ab");

        assert_eq!(char_digit_section(&password, &rules, &fmt), None);
        assert_eq!(char_upper_section(&password, &rules, &fmt), None);
        assert_eq!(char_lower_section(&password, &rules, &fmt), None);
    }
}
