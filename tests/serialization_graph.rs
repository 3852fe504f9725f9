mod support;

use newsdesk_core::application::commands::attachments::CreateImageCommand;
use newsdesk_core::application::commands::authors::CreateAuthorCommand;

use support::{seed_user, spawn_app, story_command};

/// The nested read representation expands every direct relationship one
/// level, with media credits reaching authors and authors reaching their
/// user identity.
#[tokio::test]
async fn story_json_nests_media_credits_through_authors_to_users() {
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

    let card = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Skyline".into(),
            file: "skyline.jpg".into(),
            caption: "The skyline at dusk".into(),
            credit: vec![author.id],
        })
        .await
        .unwrap();

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("skyline-feature", app.published)
                .authors(vec![author.id])
                .card(card.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["status"]["name"], "Ready to publish");
    assert_eq!(json["authors"][0]["full_name"], "Ada Lovelace");
    assert_eq!(json["authors"][0]["user"]["username"], "adalovelace");
    // Credit chain: image -> author -> user.
    assert_eq!(json["card"]["credit"][0]["user"]["username"], "adalovelace");
    assert_eq!(json["path"], "/2024/03/07/skyline-feature/");
    // Unset optional slots are omitted, not null.
    assert!(json.get("poll").is_none());
    assert!(json.get("review").is_none());
}

#[tokio::test]
async fn featured_image_resolves_to_the_card_when_flagged() {
    let app = spawn_app().await;

    let card = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Card".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let dedicated = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Dedicated".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    // Flag on: the card doubles as the featured image.
    let flagged = app
        .services
        .story_commands
        .create_story(
            story_command("flagged", app.draft)
                .card(card.id)
                .featured_image(dedicated.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    let dto = app.services.story_queries.get_story(flagged.id).await.unwrap();
    assert_eq!(dto.featured_image.as_ref().unwrap().id, card.id);
    assert_eq!(dto.card.as_ref().unwrap().id, card.id);

    // Flag off: the dedicated featured image wins.
    let unflagged = app
        .services
        .story_commands
        .create_story(
            story_command("unflagged", app.draft)
                .card(card.id)
                .featured_image(dedicated.id)
                .feature_card_image(false)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    let dto = app
        .services
        .story_queries
        .get_story(unflagged.id)
        .await
        .unwrap();
    assert_eq!(dto.featured_image.as_ref().unwrap().id, dedicated.id);
}

#[tokio::test]
async fn flag_without_card_falls_back_to_the_dedicated_image() {
    let app = spawn_app().await;

    let dedicated = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Dedicated".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("no-card", app.draft)
                .featured_image(dedicated.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert_eq!(dto.featured_image.as_ref().unwrap().id, dedicated.id);
    assert!(dto.card.is_none());
}

#[tokio::test]
async fn write_path_returns_flat_ids() {
    let app = spawn_app().await;

    let author = app
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("flat", app.draft)
                .authors(vec![author.id])
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let json = serde_json::to_value(&story).unwrap();
    assert_eq!(json["authors"][0], author.id);
    assert!(json["authors"][0].is_i64());
}
