mod support;

use newsdesk_core::application::commands::pages::{CreatePageCommand, UpdatePageCommand};
use newsdesk_core::application::error::ApplicationError;

use support::spawn_app;

#[tokio::test]
async fn slug_falls_back_to_slugified_title() {
    let app = spawn_app().await;

    let page = app
        .services
        .page_commands
        .create_page(CreatePageCommand {
            title: "About Us".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.slug, "about-us");

    let found = app
        .services
        .page_queries
        .get_page_by_slug("about-us")
        .await
        .unwrap();
    assert_eq!(found.id, page.id);
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let app = spawn_app().await;

    app.services
        .page_commands
        .create_page(CreatePageCommand {
            title: "About Us".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = app
        .services
        .page_commands
        .create_page(CreatePageCommand {
            title: "About us".into(),
            slug: "about-us".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(newsdesk_core::domain::errors::DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn children_list_under_their_parent() {
    let app = spawn_app().await;
    let commands = &app.services.page_commands;

    let parent = commands
        .create_page(CreatePageCommand {
            title: "Staff".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    for title in ["Editors", "Reporters"] {
        commands
            .create_page(CreatePageCommand {
                parent: Some(parent.id),
                title: title.into(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let children = app
        .services
        .page_queries
        .list_children(parent.id)
        .await
        .unwrap();
    let slugs: Vec<&str> = children.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["editors", "reporters"]);
}

#[tokio::test]
async fn unknown_parent_is_rejected() {
    let app = spawn_app().await;

    let err = app
        .services
        .page_commands
        .create_page(CreatePageCommand {
            parent: Some(99),
            title: "Orphan".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn page_cannot_become_its_own_parent() {
    let app = spawn_app().await;

    let page = app
        .services
        .page_commands
        .create_page(CreatePageCommand {
            title: "Recursive".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = app
        .services
        .page_commands
        .update_page(
            page.id,
            UpdatePageCommand {
                parent: Some(Some(page.id)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn deleting_a_parent_reroots_its_children() {
    let app = spawn_app().await;
    let commands = &app.services.page_commands;

    let parent = commands
        .create_page(CreatePageCommand {
            title: "Sections".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let child = commands
        .create_page(CreatePageCommand {
            parent: Some(parent.id),
            title: "Sports".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    commands.delete_page(parent.id).await.unwrap();

    let child = app.services.page_queries.get_page(child.id).await.unwrap();
    assert!(child.parent.is_none());
}
