mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateStoryCommand, CreateStoryCommandBuilder};
pub use service::StoryCommandService;
pub use update::UpdateStoryCommand;
