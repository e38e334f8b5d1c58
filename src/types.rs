//! Common types used throughout the connector
//!
//! Identifier newtypes, the backoff strategy enum and small string helpers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Group Identifier
// ============================================================================

/// URL name of a Meetup group (e.g. `aix-en-provence`)
///
/// Always non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupUrlname(String);

impl GroupUrlname {
    /// Create a group identifier, rejecting empty or blank values.
    ///
    /// The value is opaque and kept exactly as given.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::missing_field("group_urlname"));
        }
        Ok(Self(value))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupUrlname {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GroupUrlname> for String {
    fn from(group: GroupUrlname) -> Self {
        group.0
    }
}

impl fmt::Display for GroupUrlname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Credential
// ============================================================================

/// Opaque bearer token for the GraphQL API
///
/// The value never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Expose the raw token for header construction
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Check whether the token is empty or blank
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_urlname_kept_verbatim() {
        let group = GroupUrlname::new("aix-en-provence").unwrap();
        assert_eq!(group.as_str(), "aix-en-provence");
        assert_eq!(group.to_string(), "aix-en-provence");

        let padded = GroupUrlname::new(" aix-en-provence ").unwrap();
        assert_eq!(padded.as_str(), " aix-en-provence ");
    }

    #[test]
    fn test_group_urlname_rejects_blank() {
        let err = GroupUrlname::new("   ").unwrap_err();
        assert!(err.is_config());
        assert!(GroupUrlname::new("").is_err());
    }

    #[test]
    fn test_group_urlname_serde() {
        let group: GroupUrlname = serde_json::from_str("\"lyon-rust\"").unwrap();
        assert_eq!(group.as_str(), "lyon-rust");
        assert!(serde_json::from_str::<GroupUrlname>("\"\"").is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let token = Credential::new("super-secret");
        assert_eq!(format!("{token:?}"), "Credential(***)");
        assert_eq!(token.expose(), "super-secret");
        assert!(!token.is_blank());
        assert!(Credential::new(" ").is_blank());
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
    }
}
