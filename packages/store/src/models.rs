//! # Session record and role classifier
//!
//! [`Session`] is the only entity the client persists. It is created when the user
//! logs in, patched when the profile is edited and cleared on logout. Every field is
//! optional so that a half-written or legacy record still deserialises into
//! something usable.
//!
//! The record is stored as TOML (see [`Session::to_toml`]) under a single key by
//! [`crate::SessionRepository`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role classifier reported by `/api/user/role`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Parse a role name, ignoring case and an optional `ROLE_` prefix.
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted authentication and profile fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by `/api/user/login`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl Session {
    /// A session holding only a freshly issued token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Some(Role::Admin)
    }

    /// Nickname to show in the UI, falling back to a neutral label.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or("Guest")
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse(" ROLE_ADMIN "), Some(Role::Admin));
        assert_eq!(Role::parse("guest"), None);
    }

    #[test]
    fn test_session_toml_keeps_fields() {
        let session = Session {
            access_token: Some("abc.def".to_string()),
            role: Some(Role::Admin),
            nickname: Some("포즈마스터".to_string()),
            profile_image_url: None,
        };
        let text = session.to_toml().unwrap();
        assert!(text.contains("role = \"ADMIN\""));
        assert!(!text.contains("profile_image_url"));
        assert_eq!(Session::from_toml(&text).unwrap(), session);
    }

    #[test]
    fn test_empty_toml_is_anonymous() {
        let session = Session::from_toml("").unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.display_name(), "Guest");
    }

    #[test]
    fn test_blank_token_is_not_authenticated() {
        assert!(!Session::with_token("  ").is_authenticated());
        assert!(Session::with_token("t").is_authenticated());
    }

    #[test]
    fn test_admin_requires_token() {
        let session = Session {
            role: Some(Role::Admin),
            ..Session::default()
        };
        assert!(!session.is_admin());
    }
}
