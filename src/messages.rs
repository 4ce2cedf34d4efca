//! Violation codes, error-string tables and message formatting.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Symbolic identifier of a failed rule.
///
/// Variants are declared in rule-evaluation order, so the derived `Ord`
/// matches the order in which violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    LengthMin,
    LengthMax,
    CharDigitMin,
    CharUpperMin,
    CharLowerMin,
    CharSpecial,
    MustContain,
    MustNotContain,
    CustomValidate,
    NoDefinedPolicies,
    /// Synthetic key holding every message of a validation run.
    All,
}

impl ErrorCode {
    pub const ALL_CODES: [ErrorCode; 11] = [
        ErrorCode::LengthMin,
        ErrorCode::LengthMax,
        ErrorCode::CharDigitMin,
        ErrorCode::CharUpperMin,
        ErrorCode::CharLowerMin,
        ErrorCode::CharSpecial,
        ErrorCode::MustContain,
        ErrorCode::MustNotContain,
        ErrorCode::CustomValidate,
        ErrorCode::NoDefinedPolicies,
        ErrorCode::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::LengthMin => "ERR_LengthMin",
            ErrorCode::LengthMax => "ERR_LengthMax",
            ErrorCode::CharDigitMin => "ERR_CharDigitMin",
            ErrorCode::CharUpperMin => "ERR_CharUpperMin",
            ErrorCode::CharLowerMin => "ERR_CharLowerMin",
            ErrorCode::CharSpecial => "ERR_CharSpecial",
            ErrorCode::MustContain => "ERR_MustContain",
            ErrorCode::MustNotContain => "ERR_MustNotContain",
            ErrorCode::CustomValidate => "ERR_CustomValidate",
            ErrorCode::NoDefinedPolicies => "ERR_NoDefinedPolicies",
            ErrorCode::All => "ERR_All",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL_CODES
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// Per-code message templates with `{0}` / `{1}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStrings(BTreeMap<ErrorCode, String>);

impl ErrorStrings {
    /// Empty table, used for overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English table.
    pub fn defaults() -> Self {
        [
            (ErrorCode::LengthMin, "minimum length should be {0}"),
            (ErrorCode::LengthMax, "maximum length should be {0}"),
            (ErrorCode::CharDigitMin, "at least {0} of digit(s)"),
            (ErrorCode::CharUpperMin, "at least {0} of upper case character"),
            (ErrorCode::CharLowerMin, "at least {0} of lower case character"),
            (ErrorCode::CharSpecial, "at least {0} of special character {1}"),
            (ErrorCode::MustContain, "must contain {0}"),
            (ErrorCode::MustNotContain, "must not contain {0}"),
            (ErrorCode::NoDefinedPolicies, "Missing defined policies"),
        ]
        .into_iter()
        .collect()
    }

    pub fn with(mut self, code: ErrorCode, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    pub fn insert(&mut self, code: ErrorCode, template: impl Into<String>) -> Option<String> {
        self.0.insert(code, template.into())
    }

    pub fn get(&self, code: ErrorCode) -> Option<&str> {
        self.0.get(&code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorCode, &str)> {
        self.0.iter().map(|(code, t)| (*code, t.as_str()))
    }

    /// Built-in defaults with `self` layered on top; entries in `self` win.
    pub fn merged_over_defaults(&self) -> Self {
        let mut merged = Self::defaults();
        merged.0.extend(self.0.iter().map(|(c, t)| (*c, t.clone())));
        merged
    }
}

impl<S: Into<String>> FromIterator<(ErrorCode, S)> for ErrorStrings {
    fn from_iter<I: IntoIterator<Item = (ErrorCode, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(c, t)| (c, t.into())).collect())
    }
}

/// Returns the built-in error-string table.
pub fn default_error_strings() -> ErrorStrings {
    ErrorStrings::defaults()
}

/// Renders the template for `code` from `table`.
///
/// `{0}` is replaced by `values[0]`; `ERR_CharSpecial` also replaces `{1}`
/// with `values[1]`; `ERR_NoDefinedPolicies` is returned verbatim. Only the
/// first occurrence of each placeholder is substituted. A code missing from
/// `table` falls back to the built-in template.
pub fn format_error(table: &ErrorStrings, code: ErrorCode, values: &[String]) -> String {
    let template = match table.get(code) {
        Some(t) => t.to_string(),
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!("No template for {} in error-string table, using default", code);
            ErrorStrings::defaults()
                .get(code)
                .map(str::to_string)
                .unwrap_or_else(|| code.as_str().to_string())
        }
    };

    let value = |i: usize| values.get(i).map(String::as_str).unwrap_or("");

    match code {
        ErrorCode::NoDefinedPolicies => template,
        ErrorCode::CharSpecial => template
            .replacen("{0}", value(0), 1)
            .replacen("{1}", value(1), 1),
        _ => template.replacen("{0}", value(0), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trips_through_name() {
        for code in ErrorCode::ALL_CODES {
            assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
        }
        assert_eq!(
            "ERR_Nope".parse::<ErrorCode>(),
            Err(UnknownErrorCode("ERR_Nope".to_string()))
        );
    }

    #[test]
    fn test_format_error_single_placeholder() {
        let table = ErrorStrings::defaults();
        let msg = format_error(&table, ErrorCode::LengthMin, &["8".to_string()]);
        assert_eq!(msg, "minimum length should be 8");
    }

    #[test]
    fn test_format_error_char_special_uses_both_values() {
        let table = ErrorStrings::defaults();
        let msg = format_error(
            &table,
            ErrorCode::CharSpecial,
            &["2".to_string(), "!@".to_string()],
        );
        assert_eq!(msg, "at least 2 of special character !@");
    }

    #[test]
    fn test_format_error_no_defined_policies_is_verbatim() {
        let table = ErrorStrings::new().with(ErrorCode::NoDefinedPolicies, "none {0}");
        let msg = format_error(&table, ErrorCode::NoDefinedPolicies, &["x".to_string()]);
        assert_eq!(msg, "none {0}");
    }

    #[test]
    fn test_format_error_replaces_first_occurrence_only() {
        let table = ErrorStrings::new().with(ErrorCode::MustContain, "{0} and {0}");
        let msg = format_error(&table, ErrorCode::MustContain, &["abc".to_string()]);
        assert_eq!(msg, "abc and {0}");
    }

    #[test]
    fn test_format_error_missing_template_falls_back() {
        let table = ErrorStrings::new();
        let msg = format_error(&table, ErrorCode::LengthMax, &["16".to_string()]);
        assert_eq!(msg, "maximum length should be 16");
    }

    #[test]
    fn test_merged_over_defaults_prefers_overrides() {
        let overrides =
            ErrorStrings::new().with(ErrorCode::LengthMin, "password requires at least {0} characters");
        let merged = overrides.merged_over_defaults();
        assert_eq!(
            merged.get(ErrorCode::LengthMin),
            Some("password requires at least {0} characters")
        );
        assert_eq!(merged.get(ErrorCode::LengthMax), Some("maximum length should be {0}"));
        assert_eq!(merged.len(), ErrorStrings::defaults().len());
    }
}
