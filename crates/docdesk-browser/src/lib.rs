//! # docdesk-browser
//!
//! The document browser core: materializes the server tree into a flat
//! index, partitions it into the `all`/`public`/`private` views, owns the
//! Miller-column navigation state machine, reconciles that state across
//! tree refetches, resolves drag-and-drop targets, and routes previews.
//!
//! The crate is UI-framework agnostic: rendering registers its geometry
//! with [`droptarget::ColumnLayout`] and reads columns/breadcrumbs back
//! from the [`session::BrowserSession`].

pub mod droptarget;
pub mod index;
pub mod navigator;
pub mod partition;
pub mod preview;
pub mod reconcile;
pub mod session;

pub use droptarget::{ColumnLayout, DragState, DropTarget, FolderTile, Point, Rect};
pub use index::TreeIndex;
pub use navigator::{Breadcrumb, Column, ColumnNavigator, ROOT_CRUMB_NAME};
pub use preview::{Preview, PreviewMode};
pub use session::BrowserSession;
