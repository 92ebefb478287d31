pub mod compound;
pub mod edge;
pub mod explore;
pub mod face;
pub mod shape;
pub mod solid;

pub use compound::{CompoundData, CompoundId};
pub use edge::{EdgeCurve, EdgeData, EdgeId, VertexData, VertexId};
pub use face::{FaceData, FaceId, FaceSurface, OrientedEdge, WireData, WireId};
pub use shape::{Shape, ShapeKind, ShapeType};
pub use solid::{ShellData, ShellId, SolidData, SolidId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices).
/// Shapes placed many times in an assembly share one set of entries here;
/// only their [`Shape`] handles differ.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
    compounds: SlotMap<CompoundId, CompoundData>,
}

macro_rules! entity_accessors {
    ($($field:ident: $id:ty => $data:ty, $add:ident, $get:ident, $get_mut:ident, $label:literal;)*) => {
        $(
            #[doc = concat!("Inserts a ", $label, " and returns its ID.")]
            pub fn $add(&mut self, data: $data) -> $id {
                self.$field.insert(data)
            }

            #[doc = concat!("Returns a reference to the ", $label, " data.")]
            ///
            /// # Errors
            ///
            /// Returns an error if the entity is not found in the store.
            pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
                self.$field
                    .get(id)
                    .ok_or_else(|| TopologyError::EntityNotFound($label.into()))
            }

            #[doc = concat!("Returns a mutable reference to the ", $label, " data.")]
            ///
            /// # Errors
            ///
            /// Returns an error if the entity is not found in the store.
            pub fn $get_mut(&mut self, id: $id) -> Result<&mut $data, TopologyError> {
                self.$field
                    .get_mut(id)
                    .ok_or_else(|| TopologyError::EntityNotFound($label.into()))
            }
        )*
    };
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    entity_accessors! {
        vertices: VertexId => VertexData, add_vertex, vertex, vertex_mut, "vertex";
        edges: EdgeId => EdgeData, add_edge, edge, edge_mut, "edge";
        wires: WireId => WireData, add_wire, wire, wire_mut, "wire";
        faces: FaceId => FaceData, add_face, face, face_mut, "face";
        shells: ShellId => ShellData, add_shell, shell, shell_mut, "shell";
        solids: SolidId => SolidData, add_solid, solid, solid_mut, "solid";
        compounds: CompoundId => CompoundData, add_compound, compound, compound_mut, "compound";
    }

    /// Whether the entity a shape points at is present in this store.
    #[must_use]
    pub fn contains(&self, kind: ShapeKind) -> bool {
        match kind {
            ShapeKind::Compound(id) => self.compounds.contains_key(id),
            ShapeKind::Solid(id) => self.solids.contains_key(id),
            ShapeKind::Shell(id) => self.shells.contains_key(id),
            ShapeKind::Face(id) => self.faces.contains_key(id),
            ShapeKind::Wire(id) => self.wires.contains_key(id),
            ShapeKind::Edge(id) => self.edges.contains_key(id),
            ShapeKind::Vertex(id) => self.vertices.contains_key(id),
        }
    }

    /// Classifies a shape after checking it resolves in this store.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape's entity is not found in the store.
    pub fn shape_type(&self, shape: &Shape) -> Result<ShapeType, TopologyError> {
        if self.contains(shape.kind()) {
            Ok(shape.shape_type())
        } else {
            Err(TopologyError::EntityNotFound(
                shape.shape_type().name().to_lowercase(),
            ))
        }
    }
}
