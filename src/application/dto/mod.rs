pub mod attachments;
pub mod authors;
pub mod pages;
pub mod statuses;
pub mod stories;
pub mod taxonomy;

pub use attachments::{AudioDto, ImageDto, PollChoiceDto, PollDto, ReviewDto, VideoDto};
pub use authors::{AuthorDto, UserDto};
pub use pages::PageDto;
pub use statuses::StatusDto;
pub use stories::{StoryDto, StoryRecordDto};
pub use taxonomy::{SectionDto, TagDto};
