//! Wire model for the server-delivered document tree.
//!
//! The document service returns the full tree in one response, pre-expanded
//! to arbitrary depth. Nodes are read-only from the browser's perspective;
//! every mutation goes through the service and comes back as a fresh tree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NodeId;

/// A node in the server-delivered document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Opaque stable identifier, unique across the whole tree.
    pub id: NodeId,
    /// Display label; for files this also carries the extension.
    pub name: String,
    /// Whether this node is a file. Files never have children.
    pub is_file: bool,
    /// Parent node ID (None for top-level nodes).
    #[serde(default)]
    pub parent_id: Option<NodeId>,
    /// Explicit public marker set by the server, if any.
    #[serde(default)]
    pub is_public: Option<bool>,
    /// Owning user, absent for shared material.
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    /// Ordered child nodes; only ever present on folders.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        !self.is_file
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}
