//! Rule set definition - which checks apply and their thresholds.

use std::fmt;
use std::sync::Arc;

use crate::messages::ErrorCode;

/// Outcome of a custom validation hook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomOutcome {
    #[default]
    Pass,
    Message(String),
    Messages(Vec<String>),
}

impl CustomOutcome {
    /// Collapses empty messages and empty lists into `Pass`.
    pub fn normalized(self) -> Self {
        match self {
            CustomOutcome::Message(m) if m.is_empty() => CustomOutcome::Pass,
            CustomOutcome::Messages(v) if v.is_empty() => CustomOutcome::Pass,
            other => other,
        }
    }
}

impl From<String> for CustomOutcome {
    fn from(message: String) -> Self {
        CustomOutcome::Message(message)
    }
}

impl From<&str> for CustomOutcome {
    fn from(message: &str) -> Self {
        CustomOutcome::Message(message.to_string())
    }
}

impl From<Vec<String>> for CustomOutcome {
    fn from(messages: Vec<String>) -> Self {
        CustomOutcome::Messages(messages)
    }
}

impl<T: Into<CustomOutcome>> From<Option<T>> for CustomOutcome {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CustomOutcome::Pass)
    }
}

/// Caller-supplied extra check run after the built-in rules.
#[derive(Clone)]
pub struct CustomValidator(Arc<dyn Fn(&str) -> CustomOutcome + Send + Sync>);

impl CustomValidator {
    pub fn new<F, O>(f: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CustomOutcome>,
    {
        Self(Arc::new(move |password: &str| -> CustomOutcome { f(password).into() }))
    }

    pub fn call(&self, password: &str) -> CustomOutcome {
        (self.0)(password).normalized()
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

/// Caller-supplied replacement for table-based message formatting.
#[derive(Clone)]
pub struct ErrorFormatter(Arc<dyn Fn(ErrorCode, &[String]) -> String + Send + Sync>);

impl ErrorFormatter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(ErrorCode, &[String]) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, code: ErrorCode, values: &[String]) -> String {
        (self.0)(code, values)
    }
}

impl fmt::Debug for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorFormatter(..)")
    }
}

/// The configuration of a single policy.
///
/// Every rule is optional: a `None` threshold (or an empty list) means the
/// rule is not checked. `RuleSet::default()` therefore accepts any password.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub length_min: Option<usize>,
    pub length_max: Option<usize>,
    pub char_digit_min: Option<usize>,
    pub char_upper_min: Option<usize>,
    pub char_lower_min: Option<usize>,
    /// Characters counted as "special".
    pub char_special: Option<String>,
    /// Only checked when greater than zero and `char_special` is non-empty.
    pub char_special_min: Option<usize>,
    pub must_contain: Vec<String>,
    pub must_not_contain: Vec<String>,
    pub custom_validate: Option<CustomValidator>,
    pub error_string_format: Option<ErrorFormatter>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock policy: 8-16 chars, one digit, one upper, one lower and
    /// one special character out of `~!@#$%^&*()-=_+`.
    pub fn recommended() -> Self {
        Self {
            length_min: Some(8),
            length_max: Some(16),
            char_digit_min: Some(1),
            char_upper_min: Some(1),
            char_lower_min: Some(1),
            char_special: Some("~!@#$%^&*()-=_+".to_string()),
            char_special_min: Some(1),
            must_contain: Vec::new(),
            must_not_contain: Vec::new(),
            custom_validate: None,
            error_string_format: None,
        }
    }

    pub fn with_length_min(mut self, min: usize) -> Self {
        self.length_min = Some(min);
        self
    }

    pub fn with_length_max(mut self, max: usize) -> Self {
        self.length_max = Some(max);
        self
    }

    pub fn with_char_digit_min(mut self, min: usize) -> Self {
        self.char_digit_min = Some(min);
        self
    }

    pub fn with_char_upper_min(mut self, min: usize) -> Self {
        self.char_upper_min = Some(min);
        self
    }

    pub fn with_char_lower_min(mut self, min: usize) -> Self {
        self.char_lower_min = Some(min);
        self
    }

    pub fn with_char_special(mut self, set: impl Into<String>) -> Self {
        self.char_special = Some(set.into());
        self
    }

    pub fn with_char_special_min(mut self, min: usize) -> Self {
        self.char_special_min = Some(min);
        self
    }

    pub fn with_must_contain<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_contain = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_must_not_contain<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_not_contain = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom_validate<F, O>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CustomOutcome>,
    {
        self.custom_validate = Some(CustomValidator::new(f));
        self
    }

    pub fn with_error_string_format<F>(mut self, f: F) -> Self
    where
        F: Fn(ErrorCode, &[String]) -> String + Send + Sync + 'static,
    {
        self.error_string_format = Some(ErrorFormatter::new(f));
        self
    }
}

/// Returns the stock rule set, see [`RuleSet::recommended`].
pub fn default_rule_set() -> RuleSet {
    RuleSet::recommended()
}
