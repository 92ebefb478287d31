use crate::math::{Point3, Vector3};

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// An edge as used by one wire. The same edge may appear in several wires,
/// or twice in one wire (a seam), each time with its own direction.
#[derive(Debug, Clone, Copy)]
pub struct OrientedEdge {
    /// The edge being used.
    pub edge: EdgeId,
    /// `false` when the wire walks the edge from `end` to `start`.
    pub forward: bool,
}

impl OrientedEdge {
    /// Creates an edge use walking `edge` forward or in reverse.
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// An ordered loop or path of edge uses.
#[derive(Debug, Clone)]
pub struct WireData {
    /// Edge uses in walking order.
    pub edges: Vec<OrientedEdge>,
    /// Whether the last edge use ends where the first one starts.
    pub is_closed: bool,
}

impl WireData {
    /// Edge ids in wire order, repeated where the wire reuses an edge.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|used| used.edge)
    }
}

/// The surface a face lies on.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// An infinite plane through `origin`, facing `normal`.
    Plane {
        origin: Point3,
        normal: Vector3,
    },
    /// A circular cylinder of `radius` around the line through `origin`
    /// along `axis`.
    Cylinder {
        origin: Point3,
        axis: Vector3,
        radius: f64,
    },
}

/// A bounded region on a surface: one outer wire and optional holes.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Surface the face lies on.
    pub surface: FaceSurface,
    /// Outer boundary.
    pub outer_wire: WireId,
    /// Hole boundaries.
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face normal agrees with the surface normal.
    pub same_sense: bool,
}

impl FaceData {
    /// Boundary wires, outer first.
    pub fn wires(&self) -> impl Iterator<Item = WireId> + '_ {
        std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied())
    }
}
