// src/domain/attachment/entity.rs
//
// Independently stored media items. Each credits zero or more authors;
// stories reference these by id and never own their lifecycle.
use crate::domain::attachment::value_objects::{
    AudioId, ImageId, PollChoiceId, PollId, ReviewId, VideoId,
};
use crate::domain::author::AuthorId;

#[derive(Debug, Clone)]
pub struct Image {
    pub id: ImageId,
    pub title: String,
    pub file: String,
    pub caption: String,
    pub credit: Vec<AuthorId>,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub title: String,
    pub file: String,
    pub caption: String,
    pub credit: Vec<AuthorId>,
}

#[derive(Debug, Clone)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub url: String,
    pub credit: Vec<AuthorId>,
}

#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    pub credit: Vec<AuthorId>,
}

#[derive(Debug, Clone)]
pub struct Audio {
    pub id: AudioId,
    pub title: String,
    pub url: String,
    pub credit: Vec<AuthorId>,
}

#[derive(Debug, Clone)]
pub struct NewAudio {
    pub title: String,
    pub url: String,
    pub credit: Vec<AuthorId>,
}

/// A poll owns its choices; a choice belongs to exactly one poll.
#[derive(Debug, Clone)]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub choices: Vec<PollChoice>,
}

#[derive(Debug, Clone)]
pub struct NewPoll {
    pub question: String,
    pub choices: Vec<NewPollChoice>,
}

#[derive(Debug, Clone)]
pub struct PollChoice {
    pub id: PollChoiceId,
    pub poll_id: PollId,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct NewPollChoice {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub item: String,
    pub rating: Option<i16>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub item: String,
    pub rating: Option<i16>,
    pub body: String,
}
