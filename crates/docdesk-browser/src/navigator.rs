//! Miller-column navigation state machine.
//!
//! One controller owns the ordered stack of open columns and the parallel
//! breadcrumb trail, so that "replace the whole navigation state" is a
//! single atomic transition rather than several interdependent field
//! updates.
//!
//! Invariants maintained after every operation:
//! - breadcrumb length equals column length, and breadcrumb 0 is the root
//!   sentinel (`id = None`),
//! - `columns[i].selected_id == breadcrumbs[i + 1].id` for every column
//!   except the last, which never has a selection.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use docdesk_core::types::NodeId;
use docdesk_entity::item::FileItem;
use docdesk_entity::view::ViewMode;

use crate::index::TreeIndex;
use crate::partition;

/// Display label of the root sentinel breadcrumb.
pub const ROOT_CRUMB_NAME: &str = "All Folders";

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    /// Folder id; `None` only for the root sentinel.
    pub id: Option<NodeId>,
    /// Display label.
    pub name: String,
}

impl Breadcrumb {
    /// The root sentinel that every trail starts with.
    pub fn root() -> Self {
        Self {
            id: None,
            name: ROOT_CRUMB_NAME.to_string(),
        }
    }
}

/// One open panel of the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Stable key for UI list reconciliation.
    pub id: String,
    /// The folder whose children this column shows; `None` for the root
    /// column.
    pub folder_id: Option<NodeId>,
    /// The rendered items, in delivery order.
    pub items: Vec<FileItem>,
    /// The item the user descended into, set on every column except the
    /// last.
    pub selected_id: Option<NodeId>,
}

/// Owns the column stack and breadcrumb trail for one browser instance.
#[derive(Debug, Clone)]
pub struct ColumnNavigator {
    columns: Vec<Column>,
    breadcrumbs: Vec<Breadcrumb>,
    view: ViewMode,
    column_serial: u64,
}

impl ColumnNavigator {
    /// Create a navigator at the partitioned root of a snapshot.
    pub fn new(view: ViewMode, index: &TreeIndex) -> Self {
        let mut nav = Self {
            columns: Vec::new(),
            breadcrumbs: Vec::new(),
            view,
            column_serial: 0,
        };
        nav.reset(index);
        nav
    }

    /// The open columns, root first.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The breadcrumb trail, root sentinel first.
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    /// The active view partition.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// The folder shown by the deepest open column, if any folder has been
    /// opened at all. This is the implicit upload target.
    pub fn current_folder_id(&self) -> Option<NodeId> {
        self.columns.last().and_then(|c| c.folder_id)
    }

    /// Reset to the partitioned root view, discarding any open columns.
    pub fn reset(&mut self, index: &TreeIndex) {
        let items = partition::root_items(self.view, index);
        let root = self.make_column(None, items);
        self.columns = vec![root];
        self.breadcrumbs = vec![Breadcrumb::root()];
    }

    /// Open a folder from the column at `at_column`, discarding any deeper
    /// navigation from a previous descent.
    ///
    /// A file, an out-of-range column index, or an id unknown to the
    /// snapshot is a silent no-op.
    pub fn descend(&mut self, item: &FileItem, at_column: usize, index: &TreeIndex) {
        if !item.is_folder() {
            debug!(item = %item.id(), "Descend ignored: not a folder");
            return;
        }
        if at_column >= self.columns.len() {
            warn!(at_column, open = self.columns.len(), "Descend ignored: no such column");
            return;
        }
        let Some(children) = index.children_of(item.id()) else {
            warn!(item = %item.id(), "Descend ignored: folder is not in the current tree");
            return;
        };

        self.columns.truncate(at_column + 1);
        self.breadcrumbs.truncate(at_column + 1);

        self.columns[at_column].selected_id = Some(item.id());
        let column = self.make_column(Some(item.id()), children);
        self.columns.push(column);
        self.breadcrumbs.push(Breadcrumb {
            id: Some(item.id()),
            name: item.name().to_string(),
        });
    }

    /// Jump to a breadcrumb entry.
    ///
    /// Index 0 resets to the partitioned root. Any other index replays the
    /// trail up to that entry against the current snapshot, re-deriving
    /// each intermediate column fresh, so the jump reflects mutations that
    /// happened while the user was several levels deep.
    pub fn jump_to_breadcrumb(&mut self, index_pos: usize, index: &TreeIndex) {
        if index_pos >= self.breadcrumbs.len() {
            warn!(index_pos, "Breadcrumb jump ignored: no such entry");
            return;
        }
        if index_pos == 0 {
            self.reset(index);
            return;
        }
        let trail: Vec<Breadcrumb> = self.breadcrumbs[..=index_pos].to_vec();
        self.rebuild_from_trail(&trail, index);
    }

    /// Switch the view partition, resetting to its root.
    ///
    /// Breadcrumbs are not carried across a view switch: visibility
    /// boundaries are not nested, so a deep path may not exist in the new
    /// view.
    pub fn switch_view(&mut self, view: ViewMode, index: &TreeIndex) {
        self.view = view;
        self.reset(index);
    }

    /// Rebuild the navigation state by replaying a breadcrumb trail
    /// against a snapshot.
    ///
    /// Replay stops at the first entry whose folder is missing from the
    /// snapshot (or is no longer a folder); the state truncates at the
    /// deepest surviving ancestor. Returns how many entries after the root
    /// sentinel survived.
    pub fn rebuild_from_trail(&mut self, trail: &[Breadcrumb], index: &TreeIndex) -> usize {
        self.reset(index);
        let mut survived = 0;
        for crumb in trail.iter().skip(1) {
            let Some(id) = crumb.id else { break };
            let Some(item) = index.lookup(id).cloned() else { break };
            if !item.is_folder() {
                break;
            }
            let at = self.columns.len() - 1;
            self.descend(&item, at, index);
            if self.breadcrumbs.last().and_then(|b| b.id) != Some(id) {
                break;
            }
            survived += 1;
        }
        survived
    }

    fn make_column(&mut self, folder_id: Option<NodeId>, items: Vec<FileItem>) -> Column {
        let id = format!("col-{}", self.column_serial);
        self.column_serial += 1;
        Column {
            id,
            folder_id,
            items,
            selected_id: None,
        }
    }
}
