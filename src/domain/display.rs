// src/domain/display.rs
//
// Presentation references shared by Story and Page. Templates live in an
// external display system, so they stay opaque ids here; card layout and
// focal point are closed sets owned by this crate.
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub i64);

impl TemplateId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "template id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TemplateId> for i64 {
    fn from(value: TemplateId) -> Self {
        value.0
    }
}

/// Layout size for a story card in list and teaser views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
    Jumbo,
}

impl CardSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Jumbo => "jumbo",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "jumbo" => Ok(Self::Jumbo),
            other => Err(DomainError::Validation(format!(
                "unknown card size: {other}"
            ))),
        }
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-character focal-point code for card image cropping: row
/// (top/center/bottom) then column (left/center/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFocus {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl CardFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopCenter => "tc",
            Self::TopRight => "tr",
            Self::CenterLeft => "cl",
            Self::Center => "cc",
            Self::CenterRight => "cr",
            Self::BottomLeft => "bl",
            Self::BottomCenter => "bc",
            Self::BottomRight => "br",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "tl" => Ok(Self::TopLeft),
            "tc" => Ok(Self::TopCenter),
            "tr" => Ok(Self::TopRight),
            "cl" => Ok(Self::CenterLeft),
            "cc" => Ok(Self::Center),
            "cr" => Ok(Self::CenterRight),
            "bl" => Ok(Self::BottomLeft),
            "bc" => Ok(Self::BottomCenter),
            "br" => Ok(Self::BottomRight),
            other => Err(DomainError::Validation(format!(
                "unknown card focus: {other}"
            ))),
        }
    }
}

impl fmt::Display for CardFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_focus_round_trips_all_codes() {
        for code in ["tl", "tc", "tr", "cl", "cc", "cr", "bl", "bc", "br"] {
            let focus = CardFocus::parse(code).unwrap();
            assert_eq!(focus.as_str(), code);
        }
    }

    #[test]
    fn card_focus_rejects_unknown_code() {
        assert!(CardFocus::parse("xx").is_err());
    }

    #[test]
    fn card_focus_defaults_to_center() {
        assert_eq!(CardFocus::default(), CardFocus::Center);
    }

    #[test]
    fn card_size_rejects_unknown_value() {
        assert!(CardSize::parse("huge").is_err());
    }
}
