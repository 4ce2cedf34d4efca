//! Property-based tests for policy validation.
//!
//! These tests use proptest to verify invariants around:
//! - Unconstrained rule sets accepting everything
//! - Agreement between `validate` and `is_valid`
//! - `LengthMin` monotonicity
//! - `ERR_All` ordering

use proptest::prelude::*;
use secrecy::SecretString;

use crate::messages::{ErrorCode, ErrorStrings};
use crate::policy::PasswordPolicy;
use crate::registry::PolicyRegistry;
use crate::rules::RuleSet;

fn pwd(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

fn policy(rules: RuleSet) -> PasswordPolicy {
    PasswordPolicy::new(&PolicyRegistry::new(), rules, &ErrorStrings::new(), "default")
}

/// Strategy for passwords mixing every character class the rules look at.
fn arb_password() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9~!@#$%^&*()=_+ .é]{0,24}").unwrap()
}

/// Strategy for rule sets with a random subset of rules configured.
fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    (
        prop::option::of(0usize..20),
        prop::option::of(0usize..30),
        prop::option::of(0usize..4),
        prop::option::of(0usize..4),
        prop::option::of(0usize..4),
        prop::option::of(0usize..4),
        prop::collection::vec("[a-c1-3]{1,2}", 0..3),
        prop::collection::vec("[a-c1-3]{1,2}", 0..3),
    )
        .prop_map(|(lmin, lmax, digit, upper, lower, special, must, must_not)| RuleSet {
            length_min: lmin,
            length_max: lmax,
            char_digit_min: digit,
            char_upper_min: upper,
            char_lower_min: lower,
            char_special: Some("!@#()".to_string()),
            char_special_min: special,
            must_contain: must,
            must_not_contain: must_not,
            ..RuleSet::default()
        })
}

proptest! {
    #[test]
    fn unconstrained_rule_set_accepts_everything(password in arb_password()) {
        let policy = policy(RuleSet::new());
        prop_assert!(policy.is_valid(&pwd(&password), ""));
    }

    #[test]
    fn validate_empty_iff_is_valid(password in arb_password(), rules in arb_rule_set()) {
        let policy = policy(rules);
        let result = policy.validate(&pwd(&password), "");
        prop_assert_eq!(result.is_empty(), policy.is_valid(&pwd(&password), ""));
        prop_assert_eq!(result.len() == 0, result.is_empty());
    }

    #[test]
    fn raising_length_min_never_validates(password in arb_password(), min in 0usize..20, bump in 0usize..10) {
        let lax = policy(RuleSet::new().with_length_min(min));
        let strict = policy(RuleSet::new().with_length_min(min + bump));
        if strict.is_valid(&pwd(&password), "") {
            prop_assert!(lax.is_valid(&pwd(&password), ""));
        }
    }

    #[test]
    fn all_is_ordered_concatenation(password in arb_password(), rules in arb_rule_set()) {
        let policy = policy(rules);
        let result = policy.validate(&pwd(&password), "");

        let flattened: Vec<String> = result
            .violations()
            .flat_map(|(_, violation)| violation.messages().to_vec())
            .collect();
        prop_assert_eq!(result.all(), flattened.as_slice());
        prop_assert_eq!(result.contains(ErrorCode::All), !flattened.is_empty());
    }
}
