//! Core type definitions used across the DocDesk workspace.

pub mod id;
pub mod tree;

pub use id::NodeId;
pub use tree::TreeNode;
