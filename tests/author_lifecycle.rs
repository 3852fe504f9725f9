mod support;

use newsdesk_core::application::commands::attachments::CreateImageCommand;
use newsdesk_core::application::commands::authors::{CreateAuthorCommand, UpdateAuthorCommand};
use newsdesk_core::application::error::ApplicationError;

use support::{seed_user, spawn_app, story_command};

#[tokio::test]
async fn blank_organization_falls_back_to_the_configured_default() {
    let app = spawn_app().await;

    let author = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(author.organization, "Staff");

    let explicit = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            organization: "The Wire Service".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(explicit.organization, "The Wire Service");
}

#[tokio::test]
async fn organizational_byline_shows_through_empty_full_name() {
    let app = spawn_app().await;

    let author = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            organization: "The Daily Herald".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(author.full_name, "");
    assert_eq!(author.organization, "The Daily Herald");
}

#[tokio::test]
async fn twitter_handle_is_stored_without_the_leading_at() {
    let app = spawn_app().await;

    let author = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            first_name: "Ada".into(),
            twitter: Some("@adalovelace".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(author.twitter.as_deref(), Some("adalovelace"));
}

#[tokio::test]
async fn linking_an_unknown_user_is_rejected() {
    let app = spawn_app().await;

    let err = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            user: Some(42),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn update_can_clear_the_twitter_handle() {
    let app = spawn_app().await;

    let author = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            first_name: "Ada".into(),
            twitter: Some("adalovelace".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = app
        .services
        .author_commands
        .update_author(
            author.id,
            UpdateAuthorCommand {
                twitter: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.twitter.is_none());
    assert_eq!(updated.first_name, "Ada");
}

/// Removing an author detaches it everywhere without touching the
/// records that referenced it.
#[tokio::test]
async fn deleting_an_author_detaches_bylines_and_credits() {
    let app = spawn_app().await;

    let user = seed_user(&app, "adalovelace", "Ada", "Lovelace").await;
    let author = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            user: Some(user),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let image = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Portrait".into(),
            credit: vec![author.id],
            ..Default::default()
        })
        .await
        .unwrap();

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("attributed", app.published)
                .authors(vec![author.id])
                .featured_image(image.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    app.services
        .author_commands
        .delete_author(author.id)
        .await
        .unwrap();

    // The story survives with an empty byline.
    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(dto.authors.is_empty());

    // The image survives with an empty credit list.
    let image = app
        .services
        .attachment_queries
        .get_image(image.id)
        .await
        .unwrap();
    assert!(image.credit.is_empty());
}

#[tokio::test]
async fn crediting_an_unknown_author_is_rejected() {
    let app = spawn_app().await;

    let err = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Orphaned".into(),
            credit: vec![7],
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}
