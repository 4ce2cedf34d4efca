//! Substring sections - required and forbidden fragments.

use secrecy::{ExposeSecret, SecretString};

use super::{Formatter, SectionResult};
use crate::messages::ErrorCode;
use crate::result::Violation;
use crate::rules::RuleSet;

fn substring_section(
    password: &SecretString,
    items: &[String],
    code: ErrorCode,
    fails: impl Fn(bool) -> bool,
    fmt: &Formatter<'_>,
) -> SectionResult {
    let pwd = password.expose_secret();
    let messages: Vec<String> = items
        .iter()
        .filter(|item| fails(pwd.contains(item.as_str())))
        .map(|item| fmt.format(code, std::slice::from_ref(item)))
        .collect();

    if messages.is_empty() {
        return None;
    }
    Some((code, Violation::Multiple(messages)))
}

/// One message per entry of `must_contain` missing from the password.
pub fn must_contain_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    substring_section(password, &rules.must_contain, ErrorCode::MustContain, |found| !found, fmt)
}

/// One message per entry of `must_not_contain` present in the password.
pub fn must_not_contain_section(password: &SecretString, rules: &RuleSet, fmt: &Formatter<'_>) -> SectionResult {
    substring_section(password, &rules.must_not_contain, ErrorCode::MustNotContain, |found| found, fmt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ErrorStrings;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_must_contain_reports_each_missing_entry() {
        let rules = RuleSet::new().with_must_contain(["abc", "def", "123"]);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        let result = must_contain_section(&pwd("123"), &rules, &fmt);
        assert_eq!(
            result,
            Some((
                ErrorCode::MustContain,
                Violation::Multiple(vec!["must contain abc".to_string(), "must contain def".to_string()])
            ))
        );
    }

    #[test]
    fn test_must_contain_all_present() {
        let rules = RuleSet::new().with_must_contain(["ab", "12"]);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        assert_eq!(must_contain_section(&pwd("xab12"), &rules, &fmt), None);
    }

    #[test]
    fn test_must_not_contain_reports_each_present_entry() {
        let rules = RuleSet::new().with_must_not_contain(["1", "2", "a"]);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        let result = must_not_contain_section(&pwd("123"), &rules, &fmt);
        assert!(matches!(result, Some((ErrorCode::MustNotContain, _))));
        if let Some((_, violation)) = result {
            assert_eq!(violation.messages(), ["must not contain 1", "must not contain 2"]);
        }
    }

    #[test]
    fn test_substring_search_is_literal() {
        let rules = RuleSet::new().with_must_not_contain([".*"]);
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        assert_eq!(must_not_contain_section(&pwd("anything"), &rules, &fmt), None);
        assert!(must_not_contain_section(&pwd("a.*b"), &rules, &fmt).is_some());
    }

    #[test]
    fn test_empty_lists_pass() {
        let rules = RuleSet::new();
        let table = ErrorStrings::defaults();
        let fmt = Formatter::new(&rules, &table);

        assert_eq!(must_contain_section(&pwd(""), &rules, &fmt), None);
        assert_eq!(must_not_contain_section(&pwd(""), &rules, &fmt), None);
    }
}
