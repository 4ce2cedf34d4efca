//! Structured validation output.

use std::collections::BTreeMap;

use crate::messages::ErrorCode;

/// Message(s) recorded for one violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Single(String),
    /// Multi-value rules (`MustContain`, `MustNotContain`, list-returning
    /// custom validators) keep one message per offending entry.
    Multiple(Vec<String>),
}

impl Violation {
    pub fn messages(&self) -> &[String] {
        match self {
            Violation::Single(m) => std::slice::from_ref(m),
            Violation::Multiple(v) => v,
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Violation::Single(m) => Some(m),
            Violation::Multiple(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }
}

/// Per-code violations of one validation run plus the `ERR_All` aggregate.
///
/// The aggregate is stored under `ErrorCode::All` like any other code, so
/// `keys`, `get` and `iter` agree. An empty result means the password
/// satisfied the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<ErrorCode, Violation>,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a violation and appends its messages to the aggregate.
    pub(crate) fn push(&mut self, code: ErrorCode, violation: Violation) {
        let messages = violation.messages().to_vec();
        self.errors.insert(code, violation);
        if messages.is_empty() {
            return;
        }
        let all = self
            .errors
            .entry(ErrorCode::All)
            .or_insert_with(|| Violation::Multiple(Vec::new()));
        if let Violation::Multiple(all) = all {
            all.extend(messages);
        }
    }

    pub fn get(&self, code: ErrorCode) -> Option<&Violation> {
        self.errors.get(&code)
    }

    pub fn contains(&self, code: ErrorCode) -> bool {
        self.errors.contains_key(&code)
    }

    /// Every message in rule-evaluation order (the `ERR_All` entry).
    pub fn all(&self) -> &[String] {
        self.errors
            .get(&ErrorCode::All)
            .map(Violation::messages)
            .unwrap_or(&[])
    }

    /// Codes present in this result, `ErrorCode::All` last when any rule
    /// failed.
    pub fn keys(&self) -> Vec<ErrorCode> {
        self.errors.keys().copied().collect()
    }

    /// Every entry, `ErrorCode::All` included.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorCode, &Violation)> {
        self.errors.iter().map(|(code, v)| (*code, v))
    }

    /// Entries for the individual rules, without the aggregate.
    pub fn violations(&self) -> impl Iterator<Item = (ErrorCode, &Violation)> {
        self.iter().filter(|(code, _)| *code != ErrorCode::All)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
