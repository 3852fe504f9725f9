pub mod entity;
pub mod repository;

pub use entity::{NewPage, Page, PageId, PageUpdate};
pub use repository::PageRepository;
