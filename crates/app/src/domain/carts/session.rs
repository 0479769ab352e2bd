//! Session identifiers

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Longest accepted session identifier, in characters.
pub const MAX_SESSION_ID_LEN: usize = 128;

/// Client-supplied key that owns a cart.
///
/// Opaque to the server; only its shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionIdError {
    #[error("session id is empty")]
    Empty,

    #[error("session id is longer than {MAX_SESSION_ID_LEN} characters")]
    TooLong,

    #[error("session id contains whitespace or control characters")]
    InvalidCharacter,
}

impl SessionId {
    /// Validate a raw session identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is empty, too long, or contains whitespace or
    /// control characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, SessionIdError> {
        let value = value.into();

        if value.is_empty() {
            return Err(SessionIdError::Empty);
        }

        if value.chars().count() > MAX_SESSION_ID_LEN {
            return Err(SessionIdError::TooLong);
        }

        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(SessionIdError::InvalidCharacter);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = SessionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
