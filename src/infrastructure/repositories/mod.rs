mod error;
mod memory;
mod postgres_attachment;
mod postgres_author;
mod postgres_page;
mod postgres_status;
mod postgres_story;
mod postgres_taxonomy;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::MemoryBackend;
pub use postgres_attachment::PostgresAttachmentRepository;
pub use postgres_author::PostgresAuthorRepository;
pub use postgres_page::PostgresPageRepository;
pub use postgres_status::PostgresStatusRepository;
pub use postgres_story::{PostgresStoryReadRepository, PostgresStoryWriteRepository};
pub use postgres_taxonomy::PostgresTaxonomyRepository;
pub use postgres_user::PostgresUserRepository;
