mod index_map;
mod indexing;
mod presentation;

pub use index_map::IndexedMap;
pub use indexing::TopologyIndex;
pub use presentation::{LineAspect, LineType, Presentation, BOUNDARY_LINE_WIDTH};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::color::Color;
use crate::error::TopologyError;
use crate::topology::{EdgeId, FaceId, ShapeType, TopologyStore, VertexId};

static NEXT_PART_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique part identifier, strictly increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(u64);

impl PartId {
    fn next() -> Self {
        Self(NEXT_PART_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named node of a resolved assembly.
///
/// Grouping nodes carry no shape. Solid parts can additionally carry face,
/// edge and vertex numbering, built on demand by
/// [`Part::build_index_maps`].
///
/// Clones keep the id and share the presentation; compare parts by id.
#[derive(Debug, Clone)]
pub struct Part {
    id: PartId,
    name: String,
    shape: Option<Arc<Presentation>>,
    color: Color,
    vertex_map: Option<IndexedMap<VertexId>>,
    edge_map: Option<IndexedMap<EdgeId>>,
    face_map: Option<IndexedMap<FaceId>>,
}

impl PartialEq for Part {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Part {}

impl Part {
    /// Creates a part without a shape, taking the next id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PartId::next(),
            name: name.into(),
            shape: None,
            color: Color::default(),
            vertex_map: None,
            edge_map: None,
            face_map: None,
        }
    }

    /// Identifier assigned at construction.
    #[must_use]
    pub fn id(&self) -> PartId {
        self.id
    }

    /// Display name, as resolved from the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color applied to the part's presentation.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the part color. The presentation keeps its own copy.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Shared presentation, `None` for grouping parts.
    #[must_use]
    pub fn shape(&self) -> Option<&Arc<Presentation>> {
        self.shape.as_ref()
    }

    /// Whether a presentation is attached.
    #[must_use]
    pub fn has_shape(&self) -> bool {
        self.shape.is_some()
    }

    /// Attaches a presentation. Existing index maps describe the old shape
    /// and are dropped.
    pub fn set_shape(&mut self, shape: Arc<Presentation>) {
        self.shape = Some(shape);
        self.clear_index_maps();
    }

    /// Type of the attached shape.
    #[must_use]
    pub fn shape_type(&self) -> Option<ShapeType> {
        self.shape.as_ref().map(|shape| shape.shape_type())
    }

    /// Whether the attached shape is a solid.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.shape_type() == Some(ShapeType::Solid)
    }

    /// Vertex numbering, present after a successful
    /// [`Part::build_index_maps`].
    #[must_use]
    pub fn vertex_map(&self) -> Option<&IndexedMap<VertexId>> {
        self.vertex_map.as_ref()
    }

    /// Edge numbering.
    #[must_use]
    pub fn edge_map(&self) -> Option<&IndexedMap<EdgeId>> {
        self.edge_map.as_ref()
    }

    /// Face numbering.
    #[must_use]
    pub fn face_map(&self) -> Option<&IndexedMap<FaceId>> {
        self.face_map.as_ref()
    }

    /// Rebuilds the face, edge and vertex maps from scratch.
    ///
    /// Parts without a shape, or whose shape is not a solid, are left
    /// without maps. Returns whether maps were built.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape references topology missing from
    /// `store`; the part is then left without maps.
    pub fn build_index_maps(&mut self, store: &TopologyStore) -> Result<bool, TopologyError> {
        self.clear_index_maps();
        let Some(shape) = self.shape.as_ref().filter(|shape| shape.shape_type() == ShapeType::Solid)
        else {
            return Ok(false);
        };

        let index = TopologyIndex::build(store, shape.shape())?;
        self.face_map = Some(index.faces);
        self.edge_map = Some(index.edges);
        self.vertex_map = Some(index.vertices);
        Ok(true)
    }

    fn clear_index_maps(&mut self) {
        self.vertex_map = None;
        self.edge_map = None;
        self.face_map = None;
    }
}
