//! Drop-target resolution for drag-and-drop uploads.
//!
//! The renderer registers the bounding boxes of the column container and
//! of every folder tile it draws. Target resolution is pure containment
//! math against those boxes: native drag-enter/leave pairing fires
//! spuriously over nested elements, so it is never consulted.

use serde::{Deserialize, Serialize};

use docdesk_core::types::NodeId;

/// A pointer position in the same coordinate space as the registered
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect from its origin and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside this rect (edges on the origin side
    /// inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// A folder tile the renderer drew, with its current bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FolderTile {
    /// The folder the tile represents.
    pub folder_id: NodeId,
    /// Screen bounds of the tile.
    pub bounds: Rect,
}

/// Geometry of the column area as currently rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Bounds of the whole column container.
    pub container: Rect,
    /// Every visible folder tile, across all columns.
    pub tiles: Vec<FolderTile>,
}

/// Where a drop at a given point would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Upload into this folder.
    Folder(NodeId),
    /// No folder has been opened yet; the root mixes public and private
    /// material with no single owning container, so the user must select
    /// a folder first.
    SelectFolderFirst,
    /// The pointer is outside the column area.
    Outside,
}

/// Resolve the folder that receives a drop at `point`.
///
/// A hit on a specific folder tile wins regardless of which column the
/// tile belongs to; a hit on the generic column background falls back to
/// the deepest currently open folder (`current_folder`).
pub fn resolve(point: Point, layout: &ColumnLayout, current_folder: Option<NodeId>) -> DropTarget {
    if !layout.container.contains(point) {
        return DropTarget::Outside;
    }
    if let Some(tile) = layout.tiles.iter().find(|t| t.bounds.contains(point)) {
        return DropTarget::Folder(tile.folder_id);
    }
    match current_folder {
        Some(folder_id) => DropTarget::Folder(folder_id),
        None => DropTarget::SelectFolderFirst,
    }
}

/// Tracks the "dragging files" indicator and the per-folder highlight.
///
/// Leaving a folder tile while remaining inside the container clears only
/// the highlight, never the dragging indicator.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    dragging: bool,
    hovered_folder: Option<NodeId>,
}

impl DragState {
    /// A drag entered the column area.
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// The pointer moved while dragging.
    pub fn update(&mut self, point: Point, layout: &ColumnLayout) {
        if !self.dragging {
            return;
        }
        if !layout.container.contains(point) {
            self.hovered_folder = None;
            return;
        }
        self.hovered_folder = layout
            .tiles
            .iter()
            .find(|t| t.bounds.contains(point))
            .map(|t| t.folder_id);
    }

    /// The drag ended (drop or cancel).
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Whether the dragging indicator should show.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The folder tile currently under the pointer, if any.
    pub fn hovered_folder(&self) -> Option<NodeId> {
        self.hovered_folder
    }
}
