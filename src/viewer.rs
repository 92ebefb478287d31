//! Seam between resolved parts and whatever draws and picks them.

use std::fmt;
use std::sync::Arc;

use crate::part::Presentation;
use crate::topology::ShapeType;

/// Granularity at which displayed shapes can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    Vertex,
    Edge,
    Face,
    #[default]
    Solid,
}

impl SelectionMode {
    /// Sub-shape type picked in this mode.
    #[must_use]
    pub fn shape_type(self) -> ShapeType {
        match self {
            Self::Vertex => ShapeType::Vertex,
            Self::Edge => ShapeType::Edge,
            Self::Face => ShapeType::Face,
            Self::Solid => ShapeType::Solid,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Mode", self.shape_type())
    }
}

/// A display context holding presentations and a current selection mode.
pub trait Viewer {
    /// Shows a presentation. Redisplaying the same one is allowed.
    fn display(&mut self, shape: &Arc<Presentation>);

    /// Enables picking of `shape` at `mode` granularity.
    fn activate(&mut self, shape: &Arc<Presentation>, mode: SelectionMode);

    /// Disables picking of `shape` at `mode` granularity.
    fn deactivate(&mut self, shape: &Arc<Presentation>, mode: SelectionMode);

    fn selection_mode(&self) -> SelectionMode;

    fn set_selection_mode(&mut self, mode: SelectionMode);
}
