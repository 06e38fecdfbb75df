//! Flat index over the server-delivered document tree.
//!
//! The raw tree arrives as nested [`TreeNode`] values of server-controlled
//! depth. [`TreeIndex::build`] walks it once with an explicit work stack
//! (never recursion) into an arena of view items plus an id → slot map, so
//! every later lookup is O(1) instead of a fresh tree scan.

use std::collections::HashMap;

use tracing::warn;

use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::types::{NodeId, TreeNode};
use docdesk_entity::item::FileItem;
use docdesk_entity::view::Visibility;

/// One arena slot: the projected item plus the slots of its children.
#[derive(Debug, Clone)]
struct IndexedNode {
    item: FileItem,
    children: Vec<usize>,
}

/// Lookup-friendly materialization of one tree snapshot.
///
/// The index is immutable once built; a mutation on the server produces a
/// fresh tree and a fresh index. Navigation state is reconciled against
/// the new index, never patched in place.
#[derive(Debug, Clone)]
pub struct TreeIndex {
    nodes: Vec<IndexedNode>,
    by_id: HashMap<NodeId, usize>,
    roots: Vec<usize>,
}

impl TreeIndex {
    /// Build the index from the top-level nodes of a tree snapshot.
    ///
    /// A node id seen twice is a data error: the server promises unique,
    /// stable ids, and a repeated id is indistinguishable from a cyclic
    /// tree. The build fails with a validation error rather than looping.
    pub fn build(tree: &[TreeNode]) -> AppResult<Self> {
        let mut nodes: Vec<IndexedNode> = Vec::new();
        let mut by_id: HashMap<NodeId, usize> = HashMap::new();
        let mut roots: Vec<usize> = Vec::new();

        // (node, parent slot); roots pushed in reverse so pop order matches
        // delivery order.
        let mut stack: Vec<(&TreeNode, Option<usize>)> =
            tree.iter().rev().map(|n| (n, None)).collect();

        while let Some((node, parent_slot)) = stack.pop() {
            if by_id.contains_key(&node.id) {
                return Err(AppError::validation(format!(
                    "Malformed tree: node id {} appears more than once",
                    node.id
                )));
            }

            let slot = nodes.len();
            by_id.insert(node.id, slot);
            nodes.push(IndexedNode {
                item: FileItem::from_node(node),
                children: Vec::new(),
            });

            match parent_slot {
                Some(parent) => nodes[parent].children.push(slot),
                None => roots.push(slot),
            }

            if node.is_file && !node.children.is_empty() {
                warn!(node_id = %node.id, "File node carries children; ignoring them");
                continue;
            }

            for child in node.children.iter().rev() {
                stack.push((child, Some(slot)));
            }
        }

        Ok(Self {
            nodes,
            by_id,
            roots,
        })
    }

    /// Look up a node by id.
    pub fn lookup(&self, id: NodeId) -> Option<&FileItem> {
        self.by_id.get(&id).map(|&slot| &self.nodes[slot].item)
    }

    /// Whether the id refers to a folder in this snapshot.
    pub fn is_folder(&self, id: NodeId) -> bool {
        self.lookup(id).is_some_and(FileItem::is_folder)
    }

    /// The children of a node, in delivery order.
    ///
    /// Returns `None` when the id is not part of this snapshot; a known
    /// file yields an empty list.
    pub fn children_of(&self, id: NodeId) -> Option<Vec<FileItem>> {
        let &slot = self.by_id.get(&id)?;
        Some(
            self.nodes[slot]
                .children
                .iter()
                .map(|&c| self.nodes[c].item.clone())
                .collect(),
        )
    }

    /// All top-level items in delivery order.
    pub fn root_items(&self) -> impl Iterator<Item = &FileItem> {
        self.roots.iter().map(|&slot| &self.nodes[slot].item)
    }

    /// Top-level items classified public.
    pub fn public_roots(&self) -> Vec<FileItem> {
        self.roots_with(Visibility::Public)
    }

    /// Top-level items classified private.
    pub fn private_roots(&self) -> Vec<FileItem> {
        self.roots_with(Visibility::Private)
    }

    fn roots_with(&self, visibility: Visibility) -> Vec<FileItem> {
        self.root_items()
            .filter(|item| item.visibility() == visibility)
            .cloned()
            .collect()
    }

    /// Total number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
