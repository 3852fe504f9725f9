// src/application/dto/authors.rs
use crate::domain::author::Author;
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Author representation with its linked user identity nested in place
/// of the id, as the external API layer expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub organization: String,
    pub title: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mug: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl AuthorDto {
    pub fn from_parts(author: Author, user: Option<User>) -> Self {
        let full_name = author.full_name();
        Self {
            id: author.id.into(),
            first_name: author.first_name,
            last_name: author.last_name,
            full_name,
            organization: author.organization,
            title: author.title,
            email: author.email,
            twitter: author.twitter.map(Into::into),
            bio: author.bio,
            mug: author.mug.map(Into::into),
            user: user.map(Into::into),
        }
    }
}
