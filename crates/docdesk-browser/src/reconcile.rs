//! Navigation reconciliation across tree refetches.
//!
//! Every mutation (create folder, upload, delete) refetches the tree in
//! full. Resetting to root on each refetch would lose the user's place
//! after every upload, so the existing breadcrumb trail is replayed
//! against the new snapshot instead. A folder that vanished (or an
//! ancestor of it) truncates the trail at the deepest surviving ancestor;
//! reconciliation is best-effort and never fails.

use tracing::debug;

use crate::index::TreeIndex;
use crate::navigator::ColumnNavigator;

/// Rebuild the navigator's columns from its breadcrumb trail and a fresh
/// snapshot. Returns the number of trail entries (beyond the root
/// sentinel) that survived.
pub fn reconcile(navigator: &mut ColumnNavigator, index: &TreeIndex) -> usize {
    let trail = navigator.breadcrumbs().to_vec();
    let survived = navigator.rebuild_from_trail(&trail, index);
    if survived + 1 < trail.len() {
        debug!(
            requested = trail.len() - 1,
            survived, "Navigation truncated to deepest surviving ancestor"
        );
    }
    survived
}
