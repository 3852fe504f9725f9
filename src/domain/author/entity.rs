// src/domain/author/entity.rs
use crate::domain::attachment::ImageId;
use crate::domain::author::value_objects::{AuthorId, TwitterHandle};
use crate::domain::user::UserId;

/// A distinct person or organization credited for a piece of content.
///
/// A byline, not an account: the optional `user_id` links to an identity
/// record when the author also logs in, but most fields are freeform and
/// may be blank for organizational bylines.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub user_id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    pub email: String,
    pub twitter: Option<TwitterHandle>,
    pub mug: Option<ImageId>,
    pub bio: String,
}

impl Author {
    /// "first last" when either part is present, empty otherwise.
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() && self.last_name.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// What readers see in a byline: the person's name, falling back to
    /// the organization for institutional authors.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if full.is_empty() {
            self.organization.clone()
        } else {
            full
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub user_id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    pub email: String,
    pub twitter: Option<TwitterHandle>,
    pub mug: Option<ImageId>,
    pub bio: String,
}

#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: AuthorId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<Option<TwitterHandle>>,
    pub mug: Option<Option<ImageId>>,
    pub bio: Option<String>,
}

impl AuthorUpdate {
    pub fn new(id: AuthorId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            organization: None,
            title: None,
            email: None,
            twitter: None,
            mug: None,
            bio: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_twitter(mut self, twitter: Option<TwitterHandle>) -> Self {
        self.twitter = Some(twitter);
        self
    }

    pub fn with_mug(mut self, mug: Option<ImageId>) -> Self {
        self.mug = Some(mug);
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byline(first: &str, last: &str, organization: &str) -> Author {
        Author {
            id: AuthorId::new(1).unwrap(),
            user_id: None,
            first_name: first.into(),
            last_name: last.into(),
            organization: organization.into(),
            title: String::new(),
            email: String::new(),
            twitter: None,
            mug: None,
            bio: String::new(),
        }
    }

    #[test]
    fn full_name_joins_both_parts() {
        assert_eq!(byline("Ada", "Lovelace", "").full_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_is_empty_when_both_parts_blank() {
        assert_eq!(byline("", "", "The Daily Herald").full_name(), "");
    }

    #[test]
    fn full_name_keeps_single_part() {
        // Matches the original behavior: one missing part still produces
        // the joined form with a stray space.
        assert_eq!(byline("Cher", "", "").full_name(), "Cher ");
    }

    #[test]
    fn display_name_falls_back_to_organization() {
        assert_eq!(
            byline("", "", "The Daily Herald").display_name(),
            "The Daily Herald"
        );
    }
}
