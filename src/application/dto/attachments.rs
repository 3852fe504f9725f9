// src/application/dto/attachments.rs
//
// Media representations nest full author representations (each carrying
// its user identity) in place of credit ids: two levels deep, as the
// external API contract requires.
use crate::domain::attachment::{Audio, Image, Poll, PollChoice, Review, Video};
use serde::{Deserialize, Serialize};

use super::authors::AuthorDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDto {
    pub id: i64,
    pub title: String,
    pub file: String,
    pub caption: String,
    pub credit: Vec<AuthorDto>,
}

impl ImageDto {
    pub fn from_parts(image: Image, credit: Vec<AuthorDto>) -> Self {
        Self {
            id: image.id.into(),
            title: image.title,
            file: image.file,
            caption: image.caption,
            credit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub credit: Vec<AuthorDto>,
}

impl VideoDto {
    pub fn from_parts(video: Video, credit: Vec<AuthorDto>) -> Self {
        Self {
            id: video.id.into(),
            title: video.title,
            url: video.url,
            credit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub credit: Vec<AuthorDto>,
}

impl AudioDto {
    pub fn from_parts(audio: Audio, credit: Vec<AuthorDto>) -> Self {
        Self {
            id: audio.id.into(),
            title: audio.title,
            url: audio.url,
            credit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollChoiceDto {
    pub id: i64,
    pub poll_id: i64,
    pub text: String,
}

impl From<PollChoice> for PollChoiceDto {
    fn from(choice: PollChoice) -> Self {
        Self {
            id: choice.id.into(),
            poll_id: choice.poll_id.into(),
            text: choice.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollDto {
    pub id: i64,
    pub question: String,
    pub choices: Vec<PollChoiceDto>,
}

impl From<Poll> for PollDto {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.into(),
            question: poll.question,
            choices: poll.choices.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i64,
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i16>,
    pub body: String,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.into(),
            item: review.item,
            rating: review.rating,
            body: review.body,
        }
    }
}
