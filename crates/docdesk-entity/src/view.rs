//! Visibility classification and view partition enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use docdesk_core::error::AppError;
use docdesk_core::types::TreeNode;

/// Name of the shared public root folder on the document service.
pub const PUBLIC_ROOT_NAME: &str = "Public";

/// Whether a node belongs to the public or the private area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to everyone.
    Public,
    /// Visible to the owning user only.
    Private,
}

impl Visibility {
    /// Classify a node.
    ///
    /// A node is public when its name equals the literal public root
    /// marker, it carries an explicit public flag, or it has no owning
    /// user. Children inherit nothing implicitly; only their own stored
    /// flag counts.
    pub fn of(node: &TreeNode) -> Self {
        if node.name == PUBLIC_ROOT_NAME
            || node.is_public.unwrap_or(false)
            || node.owner_id.is_none()
        {
            Self::Public
        } else {
            Self::Private
        }
    }
}

/// One of the three selectable top-level views over the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Public and private roots together, in delivery order.
    #[default]
    All,
    /// Public roots only.
    Public,
    /// Private roots only.
    Private,
}

impl ViewMode {
    /// Whether the view admits a node of the given visibility.
    pub fn admits(&self, visibility: Visibility) -> bool {
        match self {
            Self::All => true,
            Self::Public => visibility == Visibility::Public,
            Self::Private => visibility == Visibility::Private,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            other => Err(AppError::validation(format!("Unknown view '{other}'"))),
        }
    }
}
