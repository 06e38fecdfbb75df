//! Integration tests for reconciliation across tree refetches.

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

async fn open_invoices(
    service: Arc<MockDocumentService>,
) -> BrowserSession<MockDocumentService> {
    let mut session = BrowserSession::connect(service, UploadConfig::default(), ViewMode::All)
        .await
        .expect("connect");
    let public = session.columns()[0].items[0].clone();
    session.descend(&public, 0);
    let invoices = session.columns()[1].items[0].clone();
    session.descend(&invoices, 1);
    assert_eq!(session.columns().len(), 3);
    session
}

#[tokio::test]
async fn test_refresh_with_unchanged_tree_keeps_position() {
    let service = sample_service();
    let mut session = open_invoices(service).await;

    session.refresh().await.expect("refresh");

    assert_eq!(session.columns().len(), 3);
    assert_eq!(session.breadcrumbs()[2].name, "Invoices");
    assert_eq!(session.columns()[2].items[0].name(), "q1.pdf");
}

#[tokio::test]
async fn test_deleted_open_folder_snaps_to_surviving_ancestor() {
    let service = sample_service();
    let mut session = open_invoices(service.clone()).await;

    service.delete_named("Invoices");
    session.refresh().await.expect("refresh");

    // Navigation ends at Public, whose column is now empty.
    assert_eq!(session.columns().len(), 2);
    assert_eq!(session.breadcrumbs().len(), 2);
    assert_eq!(session.breadcrumbs()[1].name, "Public");
    assert!(session.columns()[1].items.is_empty());
}

#[tokio::test]
async fn test_deleted_root_resets_to_root_column() {
    let service = Arc::new(MockDocumentService::new(tree(vec![
        folder("Projects", vec![folder("Sub", vec![])]),
        folder("Other", vec![]),
    ])));
    let mut session =
        BrowserSession::connect(service.clone(), UploadConfig::default(), ViewMode::All)
            .await
            .expect("connect");
    let projects = session.columns()[0].items[0].clone();
    session.descend(&projects, 0);

    service.delete_named("Projects");
    session.refresh().await.expect("refresh");

    assert_eq!(session.columns().len(), 1);
    assert_eq!(session.breadcrumbs().len(), 1);
    let names: Vec<&str> = session.columns()[0]
        .items
        .iter()
        .map(|i| i.name())
        .collect();
    assert_eq!(names, ["Other"]);
}

#[tokio::test]
async fn test_superseded_snapshot_is_discarded() {
    let service = sample_service();
    let mut session = open_invoices(service.clone()).await;

    let stale = session.begin_fetch();
    let stale_nodes = service.list_tree_now();
    let fresh = session.begin_fetch();

    // Issuance order decides, not response arrival order.
    service.delete_named("Invoices");
    let fresh_nodes = service.list_tree_now();
    assert!(session.apply_snapshot(fresh, &fresh_nodes).expect("apply"));
    assert_eq!(session.columns().len(), 2);

    let applied = session
        .apply_snapshot(stale, &stale_nodes)
        .expect("stale apply");
    assert!(!applied);
    assert_eq!(session.columns().len(), 2);
    assert_eq!(session.breadcrumbs()[1].name, "Public");
}

#[tokio::test]
async fn test_failed_refresh_leaves_navigation_untouched() {
    let service = sample_service();
    let mut session = open_invoices(service.clone()).await;

    service.fail_listing(true);
    assert!(session.refresh().await.is_err());

    assert_eq!(session.columns().len(), 3);
    assert_eq!(session.breadcrumbs()[2].name, "Invoices");
}
