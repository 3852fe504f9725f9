mod support;

use std::sync::Arc;

use newsdesk_core::application::error::ApplicationError;

use support::{spawn_app, story_command};

#[tokio::test]
async fn first_story_takes_position_zero() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(story_command("city-council", app.draft).build().unwrap())
        .await
        .unwrap();

    assert_eq!(story.position, 0);
}

#[tokio::test]
async fn assigned_positions_count_up_from_the_maximum() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    for (i, slug) in ["one", "two", "three"].iter().enumerate() {
        let story = commands
            .create_story(story_command(slug, app.draft).build().unwrap())
            .await
            .unwrap();
        assert_eq!(story.position, i as i64);
    }

    // An explicit gap moves the maximum; assignment continues past it.
    let gapped = commands
        .create_story(
            story_command("four", app.draft)
                .position(10)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(gapped.position, 10);

    let next = commands
        .create_story(story_command("five", app.draft).build().unwrap())
        .await
        .unwrap();
    assert_eq!(next.position, 11);
}

#[tokio::test]
async fn explicit_duplicate_position_is_a_conflict() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    commands
        .create_story(
            story_command("original", app.draft)
                .position(5)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let err = commands
        .create_story(
            story_command("squatter", app.draft)
                .position(5)
                .build()
                .unwrap(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(newsdesk_core::domain::errors::DomainError::Conflict(_))
    ));
}

/// A story parked at the integer ceiling leaves no room for the next
/// assignment; the error is a validation failure, not a wrapped or
/// reused position.
#[tokio::test]
async fn assignment_past_the_integer_ceiling_is_rejected() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    commands
        .create_story(
            story_command("ceiling", app.draft)
                .position(i64::MAX)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let err = commands
        .create_story(story_command("overflow", app.draft).build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(newsdesk_core::domain::errors::DomainError::Validation(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creation_yields_distinct_contiguous_positions() {
    let app = Arc::new(spawn_app().await);
    let count = 16;

    let mut handles = Vec::with_capacity(count);
    for i in 0..count {
        let app = Arc::clone(&app);
        handles.push(tokio::spawn(async move {
            app.services
                .story_commands
                .create_story(
                    story_command(&format!("story-{i}"), app.draft)
                        .build()
                        .unwrap(),
                )
                .await
                .unwrap()
                .position
        }));
    }

    let mut positions = Vec::with_capacity(count);
    for handle in handles {
        positions.push(handle.await.unwrap());
    }
    positions.sort_unstable();

    let expected: Vec<i64> = (0..count as i64).collect();
    assert_eq!(positions, expected);
}

#[tokio::test]
async fn listing_orders_by_position_descending() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    for slug in ["oldest", "middle", "newest"] {
        commands
            .create_story(story_command(slug, app.draft).build().unwrap())
            .await
            .unwrap();
    }

    let listed = app.services.story_queries.list_stories().await.unwrap();
    let slugs: Vec<&str> = listed.iter().map(|s| s.assignment_slug.as_str()).collect();
    assert_eq!(slugs, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn url_slug_falls_back_to_slugified_title() {
    let app = spawn_app().await;

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("budget", app.draft)
                .title("Council Approves Budget!")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(story.url_slug, "council-approves-budget");

    // An explicit slug is never overwritten.
    let explicit = app
        .services
        .story_commands
        .create_story(
            story_command("budget-2", app.draft)
                .title("Council Approves Budget, Again")
                .url_slug("budget-redux")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(explicit.url_slug, "budget-redux");
}

/// Url slugs are not unique; the oldest story wins a slug lookup.
#[tokio::test]
async fn slug_lookup_returns_the_oldest_match() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    commands
        .create_story(
            story_command("first-take", app.draft)
                .url_slug("shared-slug")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    commands
        .create_story(
            story_command("second-take", app.draft)
                .url_slug("shared-slug")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dto = app
        .services
        .story_queries
        .get_story_by_url_slug("shared-slug")
        .await
        .unwrap();
    assert_eq!(dto.assignment_slug, "first-take");
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let app = spawn_app().await;

    let err = app
        .services
        .story_commands
        .create_story(story_command("orphan", 999).build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn update_patches_only_named_fields() {
    let app = spawn_app().await;
    let commands = &app.services.story_commands;

    let created = commands
        .create_story(
            story_command("patchable", app.draft)
                .teaser("before")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    app.clock.advance(chrono::Duration::minutes(5));
    let updated = commands
        .update_story(
            created.id,
            newsdesk_core::application::commands::stories::UpdateStoryCommand {
                teaser: Some("after".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.teaser, "after");
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.created, created.created);
    assert!(updated.last_updated > created.last_updated);
}

#[tokio::test]
async fn delete_removes_the_story() {
    let app = spawn_app().await;

    let created = app
        .services
        .story_commands
        .create_story(story_command("ephemeral", app.draft).build().unwrap())
        .await
        .unwrap();

    app.services
        .story_commands
        .delete_story(created.id)
        .await
        .unwrap();

    let err = app
        .services
        .story_queries
        .get_story(created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
