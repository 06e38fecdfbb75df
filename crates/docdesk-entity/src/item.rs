//! View-level projection of tree nodes.
//!
//! A [`FileItem`] is what a browser column actually renders. It is a
//! tagged union rather than one struct with optional fields, so that a
//! file with children or a folder with a mime category is
//! unrepresentable.

use serde::{Deserialize, Serialize};

use docdesk_core::traits::DocumentUrls;
use docdesk_core::types::{NodeId, TreeNode};

use crate::mime::MimeCategory;
use crate::view::Visibility;

/// A folder as rendered in a browser column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderItem {
    /// Node identifier.
    pub id: NodeId,
    /// Display label.
    pub name: String,
    /// Parent node, if any.
    pub parent_id: Option<NodeId>,
    /// Public/private classification.
    pub visibility: Visibility,
    /// Number of direct children.
    pub child_count: usize,
}

/// A file as rendered in a browser column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Node identifier.
    pub id: NodeId,
    /// Display label (including extension).
    pub name: String,
    /// Parent node, if any.
    pub parent_id: Option<NodeId>,
    /// Public/private classification.
    pub visibility: Visibility,
    /// Lowercase extension inferred from the name.
    pub extension: Option<String>,
    /// Coarse mime category inferred from the extension.
    pub mime_category: MimeCategory,
}

impl FileEntry {
    /// Thumbnail URL for grid display, computed only for inline-previewable
    /// categories (image and PDF).
    pub fn thumbnail_url(&self, urls: &dyn DocumentUrls) -> Option<String> {
        self.mime_category
            .is_inline_previewable()
            .then(|| urls.thumbnail_url(self.id, self.parent_id))
    }
}

/// One entry of a browser column: a folder or a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FileItem {
    /// A descendable folder.
    Folder(FolderItem),
    /// A leaf file.
    File(FileEntry),
}

impl FileItem {
    /// Project a wire tree node into a view item.
    pub fn from_node(node: &TreeNode) -> Self {
        let visibility = Visibility::of(node);
        if node.is_file {
            let extension = node.extension();
            let mime_category = MimeCategory::from_extension(extension.as_deref());
            Self::File(FileEntry {
                id: node.id,
                name: node.name.clone(),
                parent_id: node.parent_id,
                visibility,
                extension,
                mime_category,
            })
        } else {
            Self::Folder(FolderItem {
                id: node.id,
                name: node.name.clone(),
                parent_id: node.parent_id,
                visibility,
                child_count: node.children.len(),
            })
        }
    }

    /// Node identifier.
    pub fn id(&self) -> NodeId {
        match self {
            Self::Folder(f) => f.id,
            Self::File(f) => f.id,
        }
    }

    /// Display label.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::File(f) => &f.name,
        }
    }

    /// Parent node, if any.
    pub fn parent_id(&self) -> Option<NodeId> {
        match self {
            Self::Folder(f) => f.parent_id,
            Self::File(f) => f.parent_id,
        }
    }

    /// Public/private classification.
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Folder(f) => f.visibility,
            Self::File(f) => f.visibility,
        }
    }

    /// Whether this item can be descended into.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}
