//! Data layer for a newsroom CMS: stories with bylines, linked media,
//! workflow statuses, taxonomy, and static pages, plus the derived
//! publication and breaking-news state the public site reads.
//!
//! Layered as domain (entities, value objects, repository ports),
//! application (command/query services producing serializable DTOs),
//! and infrastructure (Postgres via `sqlx`, plus an in-memory backend).
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
