use crate::domain::attachment::entity::{
    Audio, Image, NewAudio, NewImage, NewPoll, NewReview, NewVideo, Poll, Review, Video,
};
use crate::domain::attachment::value_objects::{AudioId, ImageId, PollId, ReviewId, VideoId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage port for every media type a story can link.
///
/// Deletes detach the item from any story referencing it (the story
/// survives with the slot cleared) and drop its credit rows; they never
/// cascade into authors or stories.
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn insert_image(&self, image: NewImage) -> DomainResult<Image>;
    async fn find_image(&self, id: ImageId) -> DomainResult<Option<Image>>;
    async fn delete_image(&self, id: ImageId) -> DomainResult<()>;

    async fn insert_video(&self, video: NewVideo) -> DomainResult<Video>;
    async fn find_video(&self, id: VideoId) -> DomainResult<Option<Video>>;
    async fn delete_video(&self, id: VideoId) -> DomainResult<()>;

    async fn insert_audio(&self, audio: NewAudio) -> DomainResult<Audio>;
    async fn find_audio(&self, id: AudioId) -> DomainResult<Option<Audio>>;
    async fn delete_audio(&self, id: AudioId) -> DomainResult<()>;

    async fn insert_poll(&self, poll: NewPoll) -> DomainResult<Poll>;
    async fn find_poll(&self, id: PollId) -> DomainResult<Option<Poll>>;
    async fn delete_poll(&self, id: PollId) -> DomainResult<()>;

    async fn insert_review(&self, review: NewReview) -> DomainResult<Review>;
    async fn find_review(&self, id: ReviewId) -> DomainResult<Option<Review>>;
    async fn delete_review(&self, id: ReviewId) -> DomainResult<()>;
}
