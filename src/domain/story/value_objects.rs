use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoryId(pub i64);

impl StoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("story id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<StoryId> for i64 {
    fn from(value: StoryId) -> Self {
        value.0
    }
}

/// Internal newsroom identifier for a story. Free text, required, not
/// unique; the public identifier is the url slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSlug(String);

impl AssignmentSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "assignment slug cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssignmentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AssignmentSlug> for String {
    fn from(value: AssignmentSlug) -> Self {
        value.0
    }
}

/// Primary sort key for story listings (descending). Unique across all
/// stories once persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoryPosition(pub i64);

impl StoryPosition {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            Err(DomainError::Validation(
                "story position cannot be negative".into(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn first() -> Self {
        Self(0)
    }

    pub fn next(&self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::Validation("story position overflow".into()))
    }
}

impl From<StoryPosition> for i64 {
    fn from(value: StoryPosition) -> Self {
        value.0
    }
}

/// How long a story stays flagged as breaking news, in whole hours from
/// its publish time. Zero means the story never breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakingDuration(i64);

impl BreakingDuration {
    /// Upper bound on the window, in hours. Keeps the duration within
    /// the range `chrono` can represent as a `Duration`.
    pub const MAX_HOURS: i64 = u32::MAX as i64;

    pub fn new(hours: i64) -> DomainResult<Self> {
        if hours < 0 {
            Err(DomainError::Validation(
                "breaking duration cannot be negative".into(),
            ))
        } else if hours > Self::MAX_HOURS {
            Err(DomainError::Validation(
                "breaking duration too large".into(),
            ))
        } else {
            Ok(Self(hours))
        }
    }

    pub fn hours(&self) -> i64 {
        self.0
    }

    pub fn as_duration(&self) -> chrono::Duration {
        chrono::Duration::hours(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_slug_rejects_blank() {
        assert!(AssignmentSlug::new("  ").is_err());
    }

    #[test]
    fn position_rejects_negative() {
        assert!(StoryPosition::new(-1).is_err());
        assert_eq!(StoryPosition::first().next().unwrap(), StoryPosition(1));
    }

    #[test]
    fn position_at_the_integer_ceiling_has_no_successor() {
        assert!(StoryPosition::new(i64::MAX).unwrap().next().is_err());
    }

    #[test]
    fn breaking_duration_rejects_negative() {
        assert!(BreakingDuration::new(-1).is_err());
        assert_eq!(BreakingDuration::new(3).unwrap().hours(), 3);
    }

    #[test]
    fn breaking_duration_rejects_oversized() {
        assert!(BreakingDuration::new(i64::MAX).is_err());
        assert!(BreakingDuration::new(BreakingDuration::MAX_HOURS).is_ok());
    }
}
