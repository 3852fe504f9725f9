mod support;

use newsdesk_core::application::commands::attachments::{
    CreateImageCommand, CreatePollCommand, CreateReviewCommand,
};
use newsdesk_core::application::error::ApplicationError;
use newsdesk_core::domain::errors::DomainError;

use support::{spawn_app, story_command};

#[tokio::test]
async fn statuses_list_in_workflow_order() {
    let app = spawn_app().await;

    // Seeded out of insertion order on purpose.
    app.services
        .status_commands
        .create_status("Archived", 5)
        .await
        .unwrap();
    app.services
        .status_commands
        .create_status("In review", 2)
        .await
        .unwrap();

    let listed = app.services.status_queries.list_statuses().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["Draft", "Ready to publish", "In review", "Archived"]
    );
}

#[tokio::test]
async fn duplicate_status_name_is_a_conflict() {
    let app = spawn_app().await;

    let err = app
        .services
        .status_commands
        .create_status("Draft", 9)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn status_in_use_cannot_be_deleted() {
    let app = spawn_app().await;

    app.services
        .story_commands
        .create_story(story_command("holder", app.draft).build().unwrap())
        .await
        .unwrap();

    let err = app
        .services
        .status_commands
        .delete_status(app.draft)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));

    // An unreferenced status goes quietly.
    let unused = app
        .services
        .status_commands
        .create_status("Spiked", 9)
        .await
        .unwrap();
    app.services
        .status_commands
        .delete_status(unused.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn poll_owns_its_choices() {
    let app = spawn_app().await;

    let poll = app
        .services
        .attachment_commands
        .create_poll(CreatePollCommand {
            question: "Best lunch spot near campus?".into(),
            choices: vec!["The diner".into(), "The food truck".into()],
        })
        .await
        .unwrap();

    assert_eq!(poll.choices.len(), 2);
    assert!(poll.choices.iter().all(|c| c.poll_id == poll.id));

    let fetched = app
        .services
        .attachment_queries
        .get_poll(poll.id)
        .await
        .unwrap();
    assert_eq!(fetched.choices.len(), 2);
}

#[tokio::test]
async fn review_rating_is_optional() {
    let app = spawn_app().await;

    let review = app
        .services
        .attachment_commands
        .create_review(CreateReviewCommand {
            item: "Campus Cafe".into(),
            rating: None,
            body: "Unrated but memorable.".into(),
        })
        .await
        .unwrap();

    assert!(review.rating.is_none());

    let json = serde_json::to_value(&review).unwrap();
    assert!(json.get("rating").is_none());
}

/// Deleting media clears the story slots that pointed at it; the story
/// itself survives.
#[tokio::test]
async fn deleting_an_image_clears_story_slots() {
    let app = spawn_app().await;

    let image = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Doomed".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("survivor", app.published)
                .card(image.id)
                .featured_image(image.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    app.services
        .attachment_commands
        .delete_image(image.id)
        .await
        .unwrap();

    let dto = app.services.story_queries.get_story(story.id).await.unwrap();
    assert!(dto.card.is_none());
    assert!(dto.featured_image.is_none());
}

#[tokio::test]
async fn deleting_a_story_leaves_its_attachments_in_place() {
    let app = spawn_app().await;

    let image = app
        .services
        .attachment_commands
        .create_image(CreateImageCommand {
            title: "Keeper".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let story = app
        .services
        .story_commands
        .create_story(
            story_command("fleeting", app.draft)
                .card(image.id)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    app.services
        .story_commands
        .delete_story(story.id)
        .await
        .unwrap();

    let kept = app
        .services
        .attachment_queries
        .get_image(image.id)
        .await
        .unwrap();
    assert_eq!(kept.title, "Keeper");
}
