mod support;

use chrono::Duration;

use newsdesk_core::application::error::ApplicationError;
use newsdesk_core::domain::errors::DomainError;

use support::{base_time, spawn_app, spawn_app_with, story_command};

#[tokio::test]
async fn published_listing_requires_status_and_elapsed_publish_time() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    // Right status, past publish time: in.
    commands
        .create_story(story_command("live", app.published).build().unwrap())
        .await
        .unwrap();
    // Right status, future publish time: out.
    commands
        .create_story(
            story_command("scheduled", app.published)
                .publish_time(base_time() + Duration::hours(2))
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    // Past publish time, still drafted: out.
    commands
        .create_story(story_command("draft", app.draft).build().unwrap())
        .await
        .unwrap();

    let listed = app.services.story_queries.list_published().await.unwrap();
    let slugs: Vec<&str> = listed.iter().map(|s| s.assignment_slug.as_str()).collect();
    assert_eq!(slugs, ["live"]);
}

#[tokio::test]
async fn publish_time_boundary_instant_is_not_published() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("on-the-dot", app.published)
                .publish_time(base_time())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    // Clock sits exactly at the publish time: strictly-before fails.
    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(!dto.is_published);

    app.clock.advance(Duration::seconds(1));
    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(dto.is_published);
}

#[tokio::test]
async fn scheduled_story_becomes_visible_when_the_clock_passes_it() {
    let app = spawn_app().await;

    app.services
        .story_commands
        .create_story(
            story_command("embargoed", app.published)
                .publish_time(base_time() + Duration::hours(1))
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(app
        .services
        .story_queries
        .list_published()
        .await
        .unwrap()
        .is_empty());

    app.clock.advance(Duration::hours(1) + Duration::seconds(1));
    assert_eq!(
        app.services.story_queries.list_published().await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn breaking_window_is_open_before_and_closed_at_the_boundary() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("breaking", app.published)
                .publish_time(base_time() - Duration::hours(1))
                .breaking_duration(3)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    // One second before publish_time + 3h.
    app.clock
        .set(base_time() + Duration::hours(2) - Duration::seconds(1));
    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(dto.is_breaking);

    // The boundary instant itself is outside the window.
    app.clock.set(base_time() + Duration::hours(2));
    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(!dto.is_breaking);
}

#[tokio::test]
async fn zero_duration_story_never_breaks() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(story_command("calm", app.published).build().unwrap())
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(dto.is_published);
    assert!(!dto.is_breaking);
}

#[tokio::test]
async fn oversized_breaking_duration_is_rejected() {
    let app = spawn_app().await;

    let err = app
        .services
        .story_commands
        .create_story(
            story_command("forever", app.published)
                .breaking_duration(i64::MAX)
                .build()
                .unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

/// A story carrying the largest accepted window still assembles; the
/// read path must never choke on stored durations.
#[tokio::test]
async fn maximal_breaking_duration_survives_the_read_path() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("standing", app.published)
                .breaking_duration(u32::MAX.into())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(dto.is_breaking);
}

#[tokio::test]
async fn unpublished_story_is_not_breaking_by_default() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("drafted-scoop", app.draft)
                .breaking_duration(6)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(!dto.is_published);
    assert!(!dto.is_breaking);
}

#[tokio::test]
async fn raw_breaking_window_applies_when_the_published_gate_is_off() {
    let app = spawn_app_with(false).await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("drafted-scoop", app.draft)
                .breaking_duration(6)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(!dto.is_published);
    assert!(dto.is_breaking);
}

#[tokio::test]
async fn path_is_derived_from_publish_time_and_url_slug() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("budget", app.published)
                .title("Council Approves Budget")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(story.path, "/2024/03/07/council-approves-budget/");
}
