pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Author, AuthorUpdate, NewAuthor};
pub use repository::AuthorRepository;
pub use value_objects::{AuthorId, TwitterHandle};
