// src/domain/taxonomy.rs
//
// Flat organizational classifications referenced many-to-many from
// stories: sections (site structure) and tags (topics).
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub i64);

impl SectionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "section id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SectionId> for i64 {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: String,
}

#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn insert_section(&self, name: &str, slug: &str) -> DomainResult<Section>;
    async fn insert_tag(&self, name: &str, slug: &str) -> DomainResult<Tag>;
    async fn find_sections(&self, ids: &[SectionId]) -> DomainResult<Vec<Section>>;
    async fn find_tags(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
    async fn list_sections(&self) -> DomainResult<Vec<Section>>;
    async fn list_tags(&self) -> DomainResult<Vec<Tag>>;
}
