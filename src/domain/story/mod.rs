pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewStory, Story, StoryUpdate};
pub use repository::{StoryReadRepository, StoryWriteRepository};
pub use value_objects::{AssignmentSlug, BreakingDuration, StoryId, StoryPosition};
