pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Audio, Image, NewAudio, NewImage, NewPoll, NewPollChoice, NewReview, NewVideo, Poll,
    PollChoice, Review, Video,
};
pub use repository::AttachmentRepository;
pub use value_objects::{AudioId, ImageId, PollChoiceId, PollId, ReviewId, VideoId};
