pub mod attachment;
pub mod author;
pub mod display;
pub mod errors;
pub mod page;
pub mod status;
pub mod story;
pub mod taxonomy;
pub mod user;
