//! View partitioning: deriving the selectable root listings.
//!
//! The three views (`all`, `public`, `private`) are filters over the same
//! snapshot; nothing here mutates state.

use docdesk_entity::item::FileItem;
use docdesk_entity::view::ViewMode;

use crate::index::TreeIndex;

/// The top-level items visible under a view, in delivery order.
///
/// `all` is the union of `public` and `private` with no duplicates and no
/// omissions; public roots are not reordered ahead of private ones.
pub fn root_items(view: ViewMode, index: &TreeIndex) -> Vec<FileItem> {
    index
        .root_items()
        .filter(|item| view.admits(item.visibility()))
        .cloned()
        .collect()
}
