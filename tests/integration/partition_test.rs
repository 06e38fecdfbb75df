//! Integration tests for view partitioning of the root column.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use docdesk_browser::{BrowserSession, TreeIndex, partition};
use docdesk_core::config::upload::UploadConfig;
use docdesk_core::types::NodeId;
use docdesk_entity::view::ViewMode;
use helpers::{MockDocumentService, file, folder, public_root, tree};

fn mixed_tree() -> Vec<docdesk_core::types::TreeNode> {
    tree(vec![
        public_root(vec![folder("Shared", vec![])]),
        folder("Projects", vec![file("notes.txt")]),
        folder("Archive", vec![]),
    ])
}

#[tokio::test]
async fn test_public_and_private_views_are_disjoint() {
    let service = Arc::new(MockDocumentService::new(mixed_tree()));

    let public =
        BrowserSession::connect(service.clone(), UploadConfig::default(), ViewMode::Public)
            .await
            .expect("connect public");
    let private =
        BrowserSession::connect(service.clone(), UploadConfig::default(), ViewMode::Private)
            .await
            .expect("connect private");

    let public_ids: HashSet<NodeId> = public.columns()[0].items.iter().map(|i| i.id()).collect();
    let private_ids: HashSet<NodeId> =
        private.columns()[0].items.iter().map(|i| i.id()).collect();
    assert!(public_ids.is_disjoint(&private_ids));
}

#[tokio::test]
async fn test_all_view_is_the_union() {
    let service = Arc::new(MockDocumentService::new(mixed_tree()));
    let all = BrowserSession::connect(service, UploadConfig::default(), ViewMode::All)
        .await
        .expect("connect all");

    let names: Vec<&str> = all.columns()[0].items.iter().map(|i| i.name()).collect();
    assert_eq!(names, ["Public", "Projects", "Archive"]);
}

#[tokio::test]
async fn test_partition_covers_every_root() {
    let nodes = mixed_tree();
    let index = TreeIndex::build(&nodes).expect("index");

    let all = partition::root_items(ViewMode::All, &index);
    let public = partition::root_items(ViewMode::Public, &index);
    let private = partition::root_items(ViewMode::Private, &index);

    assert_eq!(all.len(), public.len() + private.len());
    let all_ids: HashSet<NodeId> = all.iter().map(|i| i.id()).collect();
    for item in public.iter().chain(private.iter()) {
        assert!(all_ids.contains(&item.id()));
    }
}

#[tokio::test]
async fn test_private_view_hides_public_subtree_entirely() {
    let service = Arc::new(MockDocumentService::new(mixed_tree()));
    let session = BrowserSession::connect(service, UploadConfig::default(), ViewMode::Private)
        .await
        .expect("connect");

    let names: Vec<&str> = session.columns()[0]
        .items
        .iter()
        .map(|i| i.name())
        .collect();
    assert_eq!(names, ["Projects", "Archive"]);
}
