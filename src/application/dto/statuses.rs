use crate::domain::status::Status;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDto {
    pub id: i64,
    pub name: String,
    pub position: i16,
}

impl From<Status> for StatusDto {
    fn from(status: Status) -> Self {
        Self {
            id: status.id.into(),
            name: status.name,
            position: status.position,
        }
    }
}
