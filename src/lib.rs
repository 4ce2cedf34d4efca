//! Password policy validation library
//!
//! This library checks passwords against named, configurable rule sets
//! (length bounds, character-class minimums, required and forbidden
//! substrings, custom hooks) and reports every violated rule as a
//! human-readable message.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable validation and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_STRINGS_PATH`: Custom path to an error-string file
//!   (default: `./assets/error_strings.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{ErrorCode, ErrorStrings, PasswordPolicy, PolicyRegistry, RuleSet};
//! use secrecy::SecretString;
//!
//! // One registry per application
//! let registry = PolicyRegistry::new();
//!
//! let policy = PasswordPolicy::new(
//!     &registry,
//!     RuleSet::new().with_length_min(6).with_must_not_contain(["password"]),
//!     &ErrorStrings::new(),
//!     "default",
//! );
//!
//! let password = SecretString::new("123".to_string().into());
//! assert!(!policy.is_valid(&password, ""));
//!
//! let result = policy.validate(&password, "");
//! assert!(result.contains(ErrorCode::LengthMin));
//! assert_eq!(result.all(), ["minimum length should be 6"]);
//! ```

// Internal modules
mod messages;
mod policy;
mod registry;
mod result;
mod rules;
mod sections;
mod strings_file;
mod validator;

#[cfg(test)]
mod property_tests;

// Public API
pub use messages::{ErrorCode, ErrorStrings, UnknownErrorCode, default_error_strings, format_error};
pub use policy::PasswordPolicy;
pub use registry::{DEFAULT_POLICY_NAME, PolicyRegistry, RegistryError};
pub use result::{ValidationResult, Violation};
pub use rules::{CustomOutcome, CustomValidator, ErrorFormatter, RuleSet, default_rule_set};
pub use strings_file::{
    ErrorStringsFileError, STRINGS_PATH_ENV, get_error_strings_path, load_error_strings,
    load_error_strings_from_path,
};
pub use validator::validate_rules;

#[cfg(feature = "async")]
pub use validator::validate_rules_cancellable;
