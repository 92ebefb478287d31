use crate::color::Color;
use crate::topology::{Shape, ShapeType};

/// Width of the outline drawn along face boundaries.
pub const BOUNDARY_LINE_WIDTH: f64 = 2.0;

/// Stroke pattern of an outline. Face boundaries are always drawn solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Solid,
}

/// How a set of lines is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAspect {
    pub color: Color,
    pub line_type: LineType,
    /// Width in pixels.
    pub width: f64,
}

/// A display-ready shape: the placed topology, its color, and the
/// outline drawn along face boundaries.
///
/// Renderers and selection layers receive this wrapper; parts share it
/// through an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    shape: Shape,
    color: Color,
    face_boundary: Option<LineAspect>,
}

impl Presentation {
    /// Wraps `shape` with face boundaries outlined in `color`.
    #[must_use]
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            face_boundary: Some(LineAspect {
                color,
                line_type: LineType::Solid,
                width: BOUNDARY_LINE_WIDTH,
            }),
        }
    }

    /// The placed shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Outline drawn along face boundaries, if enabled.
    #[must_use]
    pub fn face_boundary(&self) -> Option<&LineAspect> {
        self.face_boundary.as_ref()
    }
}
