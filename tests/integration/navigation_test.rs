//! Integration tests for column navigation over a live session.

mod helpers;

use std::sync::Arc;

use docdesk_browser::BrowserSession;
use docdesk_core::config::upload::UploadConfig;
use docdesk_entity::view::ViewMode;
use helpers::{MockDocumentService, file, folder, public_root, tree};

fn sample_service() -> Arc<MockDocumentService> {
    Arc::new(MockDocumentService::new(tree(vec![
        public_root(vec![folder("Invoices", vec![file("q1.pdf")])]),
        folder("MyFolder", vec![]),
    ])))
}

#[tokio::test]
async fn test_root_shows_both_areas() {
    let session = BrowserSession::connect(sample_service(), UploadConfig::default(), ViewMode::All)
        .await
        .expect("connect");

    assert_eq!(session.columns().len(), 1);
    let names: Vec<&str> = session.columns()[0]
        .items
        .iter()
        .map(|i| i.name())
        .collect();
    assert_eq!(names, ["Public", "MyFolder"]);
    assert_eq!(session.current_folder_id(), None);
}

#[tokio::test]
async fn test_descend_to_file_level() {
    let service = sample_service();
    let mut session =
        BrowserSession::connect(service.clone(), UploadConfig::default(), ViewMode::All)
            .await
            .expect("connect");

    let public = session.columns()[0].items[0].clone();
    session.descend(&public, 0);
    assert_eq!(session.columns().len(), 2);
    assert_eq!(session.breadcrumbs()[1].name, "Public");
    assert_eq!(session.columns()[1].items[0].name(), "Invoices");

    let invoices = session.columns()[1].items[0].clone();
    session.descend(&invoices, 1);
    assert_eq!(session.columns().len(), 3);
    assert_eq!(session.columns()[2].items.len(), 1);
    assert_eq!(session.columns()[2].items[0].name(), "q1.pdf");
    assert_eq!(
        session.current_folder_id(),
        service.node_named("Invoices").map(|n| n.id)
    );
}

#[tokio::test]
async fn test_descend_then_jump_home_is_identity() {
    let mut session =
        BrowserSession::connect(sample_service(), UploadConfig::default(), ViewMode::All)
            .await
            .expect("connect");
    let initial_items = session.columns()[0].items.clone();

    let public = session.columns()[0].items[0].clone();
    session.descend(&public, 0);
    let invoices = session.columns()[1].items[0].clone();
    session.descend(&invoices, 1);

    session.jump_to_breadcrumb(0);
    assert_eq!(session.columns().len(), 1);
    assert_eq!(session.columns()[0].items, initial_items);
    assert_eq!(session.breadcrumbs().len(), 1);
    assert_eq!(session.current_folder_id(), None);
}

#[tokio::test]
async fn test_view_partitions() {
    let session =
        BrowserSession::connect(sample_service(), UploadConfig::default(), ViewMode::Private)
            .await
            .expect("connect");
    let names: Vec<&str> = session.columns()[0]
        .items
        .iter()
        .map(|i| i.name())
        .collect();
    assert_eq!(names, ["MyFolder"]);
}

#[tokio::test]
async fn test_switch_view_discards_depth() {
    let mut session =
        BrowserSession::connect(sample_service(), UploadConfig::default(), ViewMode::All)
            .await
            .expect("connect");
    let public = session.columns()[0].items[0].clone();
    session.descend(&public, 0);
    assert_eq!(session.columns().len(), 2);

    session.switch_view(ViewMode::Public);
    assert_eq!(session.view(), ViewMode::Public);
    assert_eq!(session.columns().len(), 1);
    let names: Vec<&str> = session.columns()[0]
        .items
        .iter()
        .map(|i| i.name())
        .collect();
    assert_eq!(names, ["Public"]);
}
