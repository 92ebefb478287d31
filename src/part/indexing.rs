use crate::error::TopologyError;
use crate::topology::{explore, EdgeId, FaceId, Shape, TopologyStore, VertexId};

use super::IndexedMap;

/// Face, edge and vertex numbering of one shape.
#[derive(Debug, Clone, Default)]
pub struct TopologyIndex {
    pub faces: IndexedMap<FaceId>,
    pub edges: IndexedMap<EdgeId>,
    pub vertices: IndexedMap<VertexId>,
}

impl TopologyIndex {
    /// Numbers the faces of `shape`, then for each new face its edges, then
    /// for each edge its first and last vertex.
    ///
    /// Elements reached again through a neighbouring face keep the index
    /// they got on first encounter. A face seen twice contributes nothing
    /// the second time.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape references topology missing from `store`.
    pub fn build(store: &TopologyStore, shape: &Shape) -> Result<Self, TopologyError> {
        let mut index = Self::default();
        for face in explore::faces(store, shape)? {
            if index.faces.contains(face) {
                continue;
            }
            index.faces.add(face);

            for edge in explore::face_edges(store, face)? {
                index.edges.add(edge);
                let (first, last) = explore::edge_vertices(store, edge)?;
                index.vertices.add(first);
                index.vertices.add(last);
            }
        }
        Ok(index)
    }
}
