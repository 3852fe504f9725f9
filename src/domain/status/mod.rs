pub mod entity;
pub mod repository;
pub mod workflow;

pub use entity::{NewStatus, Status, StatusId};
pub use repository::StatusRepository;
pub use workflow::WorkflowConfig;
