use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("author id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

/// Twitter handle without the leading `@`. The network caps handles at
/// fifteen characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterHandle(String);

impl TwitterHandle {
    pub const MAX_LEN: usize = 15;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let value = value.strip_prefix('@').unwrap_or(&value).to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "twitter handle cannot be empty".into(),
            ));
        }
        if value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "twitter handle cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TwitterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TwitterHandle> for String {
    fn from(value: TwitterHandle) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_strips_leading_at() {
        let handle = TwitterHandle::new("@newsdesk").unwrap();
        assert_eq!(handle.as_str(), "newsdesk");
    }

    #[test]
    fn handle_rejects_over_fifteen_characters() {
        assert!(TwitterHandle::new("a".repeat(16)).is_err());
        assert!(TwitterHandle::new("a".repeat(15)).is_ok());
    }
}
