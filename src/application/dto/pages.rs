use crate::domain::page::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_template: Option<i64>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            parent: page.parent.map(Into::into),
            title: page.title,
            slug: page.slug,
            body: page.body,
            alternate_template: page.alternate_template.map(Into::into),
        }
    }
}
