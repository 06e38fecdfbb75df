//! Shared test helpers: tree builders and an in-memory document service.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::traits::{
    CreateFolderRequest, DeleteRequest, DocumentService, DocumentUrls, UploadOutcome,
    UploadRequest,
};
use docdesk_core::types::{NodeId, TreeNode};

/// An owned private folder with the given children.
pub fn folder(name: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        id: NodeId::new(),
        name: name.to_string(),
        is_file: false,
        parent_id: None,
        is_public: Some(false),
        owner_id: Some(Uuid::new_v4()),
        children,
    }
}

/// The shared public root with the given children.
pub fn public_root(children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        id: NodeId::new(),
        name: "Public".to_string(),
        is_file: false,
        parent_id: None,
        is_public: Some(true),
        owner_id: None,
        children,
    }
}

/// An owned private file.
pub fn file(name: &str) -> TreeNode {
    TreeNode {
        id: NodeId::new(),
        name: name.to_string(),
        is_file: true,
        parent_id: None,
        is_public: Some(false),
        owner_id: Some(Uuid::new_v4()),
        children: Vec::new(),
    }
}

/// Fix up `parent_id` links the way the server delivers them.
pub fn link_parents(nodes: &mut [TreeNode]) {
    for node in nodes {
        let parent = node.id;
        for child in &mut node.children {
            child.parent_id = Some(parent);
        }
        link_parents(&mut node.children);
    }
}

/// Build a tree and wire up all parent links.
pub fn tree(mut roots: Vec<TreeNode>) -> Vec<TreeNode> {
    link_parents(&mut roots);
    roots
}

/// Find a node by name anywhere in the tree.
pub fn find_named<'a>(nodes: &'a [TreeNode], name: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find_named(&node.children, name) {
            return Some(found);
        }
    }
    None
}

fn find_node_mut(nodes: &mut [TreeNode], id: NodeId) -> Option<&mut TreeNode> {
    for node in nodes.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_node(nodes: &mut Vec<TreeNode>, id: NodeId) -> bool {
    if let Some(pos) = nodes.iter().position(|n| n.id == id) {
        nodes.remove(pos);
        return true;
    }
    for node in nodes.iter_mut() {
        if remove_node(&mut node.children, id) {
            return true;
        }
    }
    false
}

/// In-memory document service with the same semantics the HTTP client
/// sees: full-tree listing, single-file upload with conflict detection,
/// delete, and deterministic URLs.
pub struct MockDocumentService {
    tree: Mutex<Vec<TreeNode>>,
    /// Number of upload requests that actually reached the service.
    pub upload_calls: AtomicUsize,
    /// When set, every upload fails with an external-service error.
    pub fail_uploads: AtomicBool,
    fail_listing: AtomicBool,
}

impl MockDocumentService {
    pub fn new(tree: Vec<TreeNode>) -> Self {
        Self {
            tree: Mutex::new(tree),
            upload_calls: AtomicUsize::new(0),
            fail_uploads: AtomicBool::new(false),
            fail_listing: AtomicBool::new(false),
        }
    }

    /// Synchronous tree snapshot, for staging fetch races in tests.
    pub fn list_tree_now(&self) -> Vec<TreeNode> {
        self.tree.lock().expect("tree lock").clone()
    }

    /// Make subsequent tree listings fail with an external-service error.
    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    /// Snapshot a node by name, for driving mutations from tests.
    pub fn node_named(&self, name: &str) -> Option<TreeNode> {
        let tree = self.tree.lock().expect("tree lock");
        find_named(&tree, name).cloned()
    }

    /// Server-side delete without going through a session.
    pub fn delete_named(&self, name: &str) {
        let mut tree = self.tree.lock().expect("tree lock");
        if let Some(id) = find_named(&tree, name).map(|n| n.id) {
            remove_node(&mut tree, id);
        }
    }
}

impl DocumentUrls for MockDocumentService {
    fn download_url(&self, node_id: NodeId, _parent_id: Option<NodeId>) -> String {
        format!("mock://download/{node_id}")
    }

    fn thumbnail_url(&self, node_id: NodeId, _parent_id: Option<NodeId>) -> String {
        format!("mock://thumbnail/{node_id}")
    }
}

#[async_trait]
impl DocumentService for MockDocumentService {
    async fn list_tree(&self) -> AppResult<Vec<TreeNode>> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("Document service unavailable"));
        }
        Ok(self.tree.lock().expect("tree lock").clone())
    }

    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<()> {
        let mut tree = self.tree.lock().expect("tree lock");
        let node = TreeNode {
            id: NodeId::new(),
            name: req.name,
            is_file: false,
            parent_id: None,
            is_public: Some(req.is_public),
            owner_id: if req.is_public {
                None
            } else {
                Some(Uuid::new_v4())
            },
            children: Vec::new(),
        };
        tree.push(node);
        Ok(())
    }

    async fn upload(&self, req: UploadRequest) -> AppResult<UploadOutcome> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(AppError::external_service("Document service unavailable"));
        }

        let mut tree = self.tree.lock().expect("tree lock");
        let target = find_node_mut(&mut tree, req.target_folder_id)
            .ok_or_else(|| AppError::not_found("Target folder not found"))?;
        if target.is_file {
            return Err(AppError::validation("Target is not a folder"));
        }

        if let Some(existing) = target
            .children
            .iter_mut()
            .find(|c| c.is_file && c.name == req.file_name)
        {
            if !req.overwrite_confirmed {
                return Ok(UploadOutcome::ConfirmOverwrite);
            }
            existing.id = NodeId::new();
            return Ok(UploadOutcome::Completed);
        }

        let parent = target.id;
        target.children.push(TreeNode {
            id: NodeId::new(),
            name: req.file_name,
            is_file: true,
            parent_id: Some(parent),
            is_public: target.is_public,
            owner_id: target.owner_id,
            children: Vec::new(),
        });
        Ok(UploadOutcome::Completed)
    }

    async fn delete(&self, req: DeleteRequest) -> AppResult<()> {
        let mut tree = self.tree.lock().expect("tree lock");
        if remove_node(&mut tree, req.node_id) {
            Ok(())
        } else {
            Err(AppError::not_found("Node not found"))
        }
    }
}
