//! # docdesk-entity
//!
//! Domain value objects for the DocDesk document browser: the view-level
//! projection of server tree nodes ([`item::FileItem`]), mime
//! categorisation, and the visibility/view partition enums. Every type in
//! this crate derives `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod item;
pub mod mime;
pub mod view;

pub use item::{FileEntry, FileItem, FolderItem};
pub use mime::MimeCategory;
pub use view::{PUBLIC_ROOT_NAME, ViewMode, Visibility};
