use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// A corner point, in the defining shape's own coordinates.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position of the vertex.
    pub point: Point3,
}

impl VertexData {
    /// Creates a vertex at `point`.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}

/// The curve an edge lies on.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight segment between the edge's vertices.
    Line {
        /// A point on the line.
        origin: Point3,
        /// Unit direction from `start` towards `end`.
        direction: Vector3,
    },
    /// A full circle, closed on a single vertex.
    Circle {
        center: Point3,
        axis: Vector3,
        radius: f64,
    },
}

/// A bounded piece of curve between two vertices.
///
/// `start` and `end` follow the edge's own orientation, independent of how
/// any wire traverses it.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge. Equal to `start` for a closed edge.
    pub end: VertexId,
    /// Underlying curve geometry.
    pub curve: EdgeCurve,
}

impl EdgeData {
    /// `(start, end)` by the edge's own orientation.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.start, self.end)
    }

    /// Whether the edge starts and ends on the same vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }
}
