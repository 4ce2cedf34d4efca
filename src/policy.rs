//! Password policy handle - validates passwords against a named policy.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::messages::ErrorStrings;
use crate::registry::{DEFAULT_POLICY_NAME, PolicyRegistry};
use crate::result::ValidationResult;
use crate::rules::RuleSet;
use crate::validator::{missing_policy_result, validate_rules};

/// A handle bound to one policy name of a [`PolicyRegistry`].
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    registry: PolicyRegistry,
    policy_name: String,
}

impl PasswordPolicy {
    /// Registers `rules` under `name` and returns a handle using that name.
    pub fn new(
        registry: &PolicyRegistry,
        rules: RuleSet,
        error_strings: &ErrorStrings,
        name: impl Into<String>,
    ) -> Self {
        let policy_name = name.into();
        registry.register_policy(rules, error_strings, &policy_name);
        Self {
            registry: registry.clone(),
            policy_name,
        }
    }

    /// The stock rule set with the built-in messages, under `"default"`.
    pub fn with_defaults(registry: &PolicyRegistry) -> Self {
        Self::new(registry, RuleSet::recommended(), &ErrorStrings::new(), DEFAULT_POLICY_NAME)
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    /// Changes the policy used when no explicit name is passed.
    pub fn set_policy_name(&mut self, name: impl Into<String>) {
        self.policy_name = name.into();
    }

    /// Resolves the policy name; an empty `policy_name` means this handle's own.
    fn resolve(&self, policy_name: &str) -> Option<(RuleSet, ErrorStrings)> {
        let name = if policy_name.is_empty() {
            self.policy_name.as_str()
        } else {
            policy_name
        };
        let entry = self.registry.entry(name);

        #[cfg(feature = "tracing")]
        if entry.is_none() {
            tracing::warn!("Validation requested for unregistered policy: {:?}", name);
        }

        entry
    }

    /// `true` when `password` violates no rule of the policy.
    ///
    /// An unregistered policy name is never valid.
    pub fn is_valid(&self, password: &SecretString, policy_name: &str) -> bool {
        self.validate(password, policy_name).is_empty()
    }

    /// Evaluates `password` and reports every violated rule.
    ///
    /// An unregistered policy name yields a result holding only
    /// `ERR_NoDefinedPolicies` (and `ERR_All`).
    pub fn validate(&self, password: &SecretString, policy_name: &str) -> ValidationResult {
        match self.resolve(policy_name) {
            Some((rules, table)) => validate_rules(password, &rules, &table),
            None => missing_policy_result(),
        }
    }

    /// Cancellable validation; returns `None` if `token` fires before the
    /// last rule has been checked.
    #[cfg(feature = "async")]
    pub fn validate_cancellable(
        &self,
        password: &SecretString,
        policy_name: &str,
        token: Option<&CancellationToken>,
    ) -> Option<ValidationResult> {
        if token.is_some_and(CancellationToken::is_cancelled) {
            return None;
        }
        match self.resolve(policy_name) {
            Some((rules, table)) => {
                crate::validator::validate_rules_cancellable(password, &rules, &table, token)
            }
            None => Some(missing_policy_result()),
        }
    }

    /// Async version that sends the validation result via channel.
    ///
    /// Nothing is sent when the validation is cancelled.
    #[cfg(feature = "async")]
    pub async fn validate_tx(
        &self,
        password: &SecretString,
        policy_name: &str,
        token: CancellationToken,
        tx: mpsc::Sender<ValidationResult>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("validation is about to start...");

        let Some(result) = self.validate_cancellable(password, policy_name, Some(&token)) else {
            return;
        };

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password validation result: {}", _e);
        }
    }
}
