#![allow(dead_code)]
pub mod clock;

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use newsdesk_core::application::commands::stories::{
    CreateStoryCommand, CreateStoryCommandBuilder,
};
use newsdesk_core::application::services::{ApplicationServices, Repositories};
use newsdesk_core::config::AppConfig;
use newsdesk_core::domain::status::{NewStatus, StatusRepository, WorkflowConfig};
use newsdesk_core::infrastructure::repositories::MemoryBackend;
use newsdesk_core::infrastructure::util::DefaultSlugGenerator;

use clock::FixedClock;

pub const DRAFT_STATUS: &str = "Draft";
pub const PUBLISHED_STATUS: &str = "Ready to publish";

/// Every test starts at the same instant so time-window assertions stay
/// deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap()
}

pub struct TestApp {
    pub services: ApplicationServices,
    pub clock: Arc<FixedClock>,
    /// Direct store handle for seeding records with no command surface.
    pub backend: Arc<MemoryBackend>,
    /// Status ids seeded at startup.
    pub draft: i64,
    pub published: i64,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(true).await
}

pub async fn spawn_app_with(breaking_requires_published: bool) -> TestApp {
    let backend = Arc::new(MemoryBackend::new());

    let draft = StatusRepository::insert(
        backend.as_ref(),
        NewStatus::new(DRAFT_STATUS, 0).unwrap(),
    )
    .await
    .unwrap();
    let published = StatusRepository::insert(
        backend.as_ref(),
        NewStatus::new(PUBLISHED_STATUS, 1).unwrap(),
    )
    .await
    .unwrap();

    let status_repo: Arc<dyn StatusRepository> = backend.clone();
    let workflow = WorkflowConfig::resolve(&status_repo, PUBLISHED_STATUS)
        .await
        .unwrap();

    let config = AppConfig::new(
        "postgres://unused",
        PUBLISHED_STATUS,
        "Staff",
        breaking_requires_published,
    )
    .unwrap();

    let clock = Arc::new(FixedClock::at(base_time()));
    let repos = Repositories {
        story_write: backend.clone(),
        story_read: backend.clone(),
        status: status_repo,
        author: backend.clone(),
        user: backend.clone(),
        attachment: backend.clone(),
        taxonomy: backend.clone(),
        page: backend.clone(),
    };
    let services = ApplicationServices::new(
        repos,
        workflow,
        &config,
        clock.clone(),
        Arc::new(DefaultSlugGenerator),
    );

    TestApp {
        services,
        clock,
        backend,
        draft: i64::from(draft.id),
        published: i64::from(published.id),
    }
}

/// Users have no command surface of their own; seed them straight into
/// the store.
pub async fn seed_user(app: &TestApp, username: &str, first: &str, last: &str) -> i64 {
    use newsdesk_core::domain::user::{NewUser, UserRepository};

    let user = UserRepository::insert(
        app.backend.as_ref(),
        NewUser {
            username: username.into(),
            email: format!("{username}@example.com"),
            first_name: first.into(),
            last_name: last.into(),
        },
    )
    .await
    .unwrap();
    i64::from(user.id)
}

/// Builder for a minimal valid story: published an hour before the test
/// clock, title matching the assignment slug.
pub fn story_command(slug: &str, status: i64) -> CreateStoryCommandBuilder {
    CreateStoryCommand::builder()
        .assignment_slug(slug)
        .status(status)
        .title(slug)
        .publish_time(base_time() - Duration::hours(1))
}
