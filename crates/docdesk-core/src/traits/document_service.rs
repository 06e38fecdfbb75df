//! Document service trait for the external back-office API.
//!
//! The browser core never talks to the network directly. Everything it
//! needs from the surrounding application is expressed by the
//! [`DocumentService`] trait, which is defined here in `docdesk-core`
//! and implemented over HTTP in `docdesk-client` (and by an in-memory
//! mock in the test suite).

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::{NodeId, TreeNode};

/// Request to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Whether the folder is created under the public root.
    pub is_public: bool,
}

/// Request to upload a single file into a folder.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// File name (including extension).
    pub file_name: String,
    /// File content bytes.
    pub data: Bytes,
    /// The folder that receives the file.
    pub target_folder_id: NodeId,
    /// Set on re-issue after the service reported a name conflict.
    pub overwrite_confirmed: bool,
}

/// Request to delete a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    /// The node to delete.
    pub node_id: NodeId,
    /// Parent of the node, if any.
    pub parent_id: Option<NodeId>,
    /// Whether the node is a file.
    pub is_file: bool,
}

/// Outcome of an upload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The file was stored.
    Completed,
    /// A file with the same name exists; the caller must re-issue the
    /// upload with `overwrite_confirmed` set to replace it.
    ConfirmOverwrite,
}

/// Deterministic URL construction for downloads and previews.
///
/// URLs are resolved by the external service at request time; the browser
/// never caches byte content.
pub trait DocumentUrls: Send + Sync {
    /// URL serving the original file bytes.
    fn download_url(&self, node_id: NodeId, parent_id: Option<NodeId>) -> String;

    /// URL serving a reduced thumbnail rendition.
    fn thumbnail_url(&self, node_id: NodeId, parent_id: Option<NodeId>) -> String;
}

/// Trait for the external document service.
///
/// The service owns all folder/file state. The tree is delivered
/// pre-expanded in one response; there is no pagination or lazy
/// per-folder fetch.
#[async_trait]
pub trait DocumentService: DocumentUrls + Send + Sync + 'static {
    /// Fetch the full document tree visible to the caller.
    async fn list_tree(&self) -> AppResult<Vec<TreeNode>>;

    /// Create a folder at the top level of the public or private area.
    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<()>;

    /// Upload a single file into a folder.
    ///
    /// Returns [`UploadOutcome::ConfirmOverwrite`] when a file with the
    /// same name already exists and the request did not set
    /// `overwrite_confirmed`.
    async fn upload(&self, req: UploadRequest) -> AppResult<UploadOutcome>;

    /// Delete a file or folder.
    async fn delete(&self, req: DeleteRequest) -> AppResult<()>;
}
