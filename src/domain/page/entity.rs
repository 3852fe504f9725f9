// src/domain/page/entity.rs
use crate::domain::display::TemplateId;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

/// A single web page unrelated to any story: an about page, a staff
/// page, a submission page.
///
/// Pages form a tree through `parent`, stored as an id lookup rather
/// than an in-memory object graph. Cycle prevention is a write-time
/// concern of the caller, not enforced here.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub parent: Option<PageId>,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub alternate_template: Option<TemplateId>,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub parent: Option<PageId>,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub alternate_template: Option<TemplateId>,
}

#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub parent: Option<Option<PageId>>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub alternate_template: Option<Option<TemplateId>>,
}

impl PageUpdate {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            parent: None,
            title: None,
            slug: None,
            body: None,
            alternate_template: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<PageId>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_alternate_template(mut self, template: Option<TemplateId>) -> Self {
        self.alternate_template = Some(template);
        self
    }
}
