mod assemble;
mod get;
mod list;
mod published;
mod service;

pub use service::StoryQueryService;
