//! Error-string file loading
//!
//! Reads message-template overrides from a text file so that deployments
//! can reword violation messages without recompiling.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::messages::{ErrorCode, ErrorStrings};

pub const STRINGS_PATH_ENV: &str = "PWD_POLICY_STRINGS_PATH";
const DEFAULT_STRINGS_PATH: &str = "./assets/error_strings.txt";

#[derive(Error, Debug)]
pub enum ErrorStringsFileError {
    #[error("Error-string file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read error-string file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Error-string file is empty")]
    EmptyFile,
    #[error("Line {line}: expected `ERR_Code = template`")]
    MalformedLine { line: usize },
    #[error("Line {line}: unknown error code {code}")]
    UnknownCode { line: usize, code: String },
    #[error("Line {line}: {code} messages cannot be reworded")]
    FixedMessage { line: usize, code: ErrorCode },
}

/// Codes whose messages never go through an error-string table.
fn is_fixed_message(code: ErrorCode) -> bool {
    matches!(
        code,
        ErrorCode::NoDefinedPolicies | ErrorCode::CustomValidate | ErrorCode::All
    )
}

/// Returns the error-string file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_STRINGS_PATH`
/// 2. Default path `./assets/error_strings.txt`
pub fn get_error_strings_path() -> PathBuf {
    std::env::var(STRINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STRINGS_PATH))
}

/// Loads error-string overrides from the configured path.
///
/// # Errors
///
/// See [`load_error_strings_from_path`].
pub fn load_error_strings() -> Result<ErrorStrings, ErrorStringsFileError> {
    load_error_strings_from_path(get_error_strings_path())
}

/// Loads error-string overrides from a specific file.
///
/// Each line holds `ERR_Code = template`. Blank lines and lines starting
/// with `#` are skipped. The returned table only contains the codes listed
/// in the file; pass it to `register_policy` to merge it over the defaults.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
/// - A line lacks `=` or names an unknown code
/// - A line names a code whose message is fixed (`ERR_NoDefinedPolicies`,
///   `ERR_CustomValidate`, `ERR_All`)
///
/// # Example
///
/// ```rust,ignore
/// let strings = pwd_policy::load_error_strings_from_path("/etc/myapp/messages.txt")?;
/// registry.register_policy(RuleSet::recommended(), &strings, "default");
/// ```
pub fn load_error_strings_from_path<P: AsRef<Path>>(path: P) -> Result<ErrorStrings, ErrorStringsFileError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Error-string loading FAILED: FileNotFound {:?}", path);
        return Err(ErrorStringsFileError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let strings = parse_error_strings(&content)?;

    if strings.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Error-string loading FAILED: Empty file {:?}", path);
        return Err(ErrorStringsFileError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Error strings loaded: {} templates from {:?}", strings.len(), path);

    Ok(strings)
}

fn parse_error_strings(content: &str) -> Result<ErrorStrings, ErrorStringsFileError> {
    let mut strings = ErrorStrings::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (code, template) = trimmed
            .split_once('=')
            .ok_or(ErrorStringsFileError::MalformedLine { line })?;
        let code = code.trim();
        let code: ErrorCode = code.parse().map_err(|_| ErrorStringsFileError::UnknownCode {
            line,
            code: code.to_string(),
        })?;
        if is_fixed_message(code) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected template for {} on line {}", code, line);
            return Err(ErrorStringsFileError::FixedMessage { line, code });
        }

        strings.insert(code, template.trim());
    }

    Ok(strings)
}
