// src/domain/status/entity.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusId(pub i64);

impl StatusId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("status id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<StatusId> for i64 {
    fn from(value: StatusId) -> Self {
        value.0
    }
}

/// A story's current state in the editorial workflow. The set is
/// configured once (name and position both unique) and rarely changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    pub position: i16,
}

#[derive(Debug, Clone)]
pub struct NewStatus {
    pub name: String,
    pub position: i16,
}

impl NewStatus {
    pub fn new(name: impl Into<String>, position: i16) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("status name cannot be empty".into()));
        }
        if position < 0 {
            return Err(DomainError::Validation(
                "status position cannot be negative".into(),
            ));
        }
        Ok(Self { name, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_rejects_blank_name() {
        assert!(NewStatus::new("  ", 1).is_err());
    }

    #[test]
    fn new_status_rejects_negative_position() {
        assert!(NewStatus::new("Draft", -1).is_err());
    }
}
