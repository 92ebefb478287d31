//! Enumeration of sub-shapes in the store's native order.
//!
//! Every function here yields occurrences: a sub-shape reachable along two
//! paths (an edge bounding two faces, a seam edge appearing twice in one
//! wire) is yielded once per path. De-duplication is the caller's concern.

use crate::error::TopologyError;

use super::{EdgeId, FaceId, Shape, ShapeKind, TopologyStore, VertexId};

/// Faces of a shape, shell by shell, in stored order.
///
/// Compounds are walked child by child. Wires, edges and vertices have no
/// faces.
///
/// # Errors
///
/// Returns an error if any referenced entity is missing from the store.
pub fn faces(store: &TopologyStore, shape: &Shape) -> Result<Vec<FaceId>, TopologyError> {
    let mut out = Vec::new();
    collect_faces(store, shape.kind(), &mut out)?;
    Ok(out)
}

fn collect_faces(
    store: &TopologyStore,
    kind: ShapeKind,
    out: &mut Vec<FaceId>,
) -> Result<(), TopologyError> {
    match kind {
        ShapeKind::Compound(id) => {
            for child in &store.compound(id)?.children {
                collect_faces(store, child.kind(), out)?;
            }
        }
        ShapeKind::Solid(id) => {
            for shell in store.solid(id)?.shells() {
                out.extend_from_slice(&store.shell(shell)?.faces);
            }
        }
        ShapeKind::Shell(id) => out.extend_from_slice(&store.shell(id)?.faces),
        ShapeKind::Face(id) => {
            store.face(id)?;
            out.push(id);
        }
        ShapeKind::Wire(_) | ShapeKind::Edge(_) | ShapeKind::Vertex(_) => {}
    }
    Ok(())
}

/// Edges bounding a face: the outer wire first, then each inner wire.
///
/// # Errors
///
/// Returns an error if the face or one of its wires is missing.
pub fn face_edges(store: &TopologyStore, face: FaceId) -> Result<Vec<EdgeId>, TopologyError> {
    let mut edges = Vec::new();
    for wire in store.face(face)?.wires() {
        edges.extend(store.wire(wire)?.edge_ids());
    }
    Ok(edges)
}

/// First and last vertex of an edge by the edge's own orientation.
///
/// # Errors
///
/// Returns an error if the edge is missing.
pub fn edge_vertices(
    store: &TopologyStore,
    edge: EdgeId,
) -> Result<(VertexId, VertexId), TopologyError> {
    Ok(store.edge(edge)?.endpoints())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCompound, MakeCylinder};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_yields_six_faces_with_four_edges_each() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let faces = faces(&store, &Shape::from(solid)).unwrap();
        assert_eq!(faces.len(), 6);
        for face in faces {
            assert_eq!(face_edges(&store, face).unwrap().len(), 4);
        }
    }

    #[test]
    fn cylinder_lateral_face_lists_seam_twice() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), 2.0)
            .execute(&mut store)
            .unwrap();

        let faces = faces(&store, &Shape::from(solid)).unwrap();
        let lateral = face_edges(&store, faces[0]).unwrap();
        assert_eq!(lateral.len(), 4);
        assert_eq!(lateral[1], lateral[3]);
    }

    #[test]
    fn compound_walks_children_in_order() {
        let mut store = TopologyStore::new();
        let a = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let b = MakeCylinder::new(p(3.0, 0.0, 0.0), 0.5, Vector3::z(), 1.0)
            .execute(&mut store)
            .unwrap();
        let compound = MakeCompound::new(vec![Shape::from(a), Shape::from(b)])
            .execute(&mut store)
            .unwrap();

        let all = faces(&store, &Shape::from(compound)).unwrap();
        assert_eq!(all.len(), 9);
        assert_eq!(&all[..6], faces(&store, &Shape::from(a)).unwrap().as_slice());
    }

    #[test]
    fn missing_face_is_an_error() {
        let store = TopologyStore::new();
        assert!(matches!(
            face_edges(&store, FaceId::default()),
            Err(TopologyError::EntityNotFound(_))
        ));
    }
}
