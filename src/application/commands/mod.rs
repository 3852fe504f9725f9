pub mod attachments;
pub mod authors;
pub mod pages;
pub mod statuses;
pub mod stories;
