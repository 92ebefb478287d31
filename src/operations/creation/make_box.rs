use std::collections::HashMap;

use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, OrientedEdge, ShellData, SolidId, TopologyStore, VertexData,
    VertexId, WireData,
};

use super::{MakeFace, MakeSolid};

/// Corner loops of the six faces, as `(i, j, k)` bits selecting min or max
/// along each axis. Order is -X, +X, -Y, +Y, -Z, +Z; each loop winds
/// counter-clockwise seen from outside.
const FACE_LOOPS: [[(usize, usize, usize); 4]; 6] = [
    [(0, 0, 0), (0, 0, 1), (0, 1, 1), (0, 1, 0)],
    [(1, 0, 0), (1, 1, 0), (1, 1, 1), (1, 0, 1)],
    [(0, 0, 0), (1, 0, 0), (1, 0, 1), (0, 0, 1)],
    [(0, 1, 0), (0, 1, 1), (1, 1, 1), (1, 1, 0)],
    [(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 0, 0)],
    [(0, 0, 1), (1, 0, 1), (1, 1, 1), (0, 1, 1)],
];

/// Creates an axis-aligned box solid from two corner points.
///
/// The result shares topology the way a kernel box does: 8 vertices and
/// 12 edges, each edge bounding exactly two of the 6 faces.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any extent is not positive.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let extent = self.max_corner - self.min_corner;
        if extent.iter().any(|&d| d < TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "box extents must be positive, got {extent:?}"
            ))
            .into());
        }

        let corner = |i: usize, j: usize, k: usize| {
            let pick = |bit: usize, lo: f64, hi: f64| if bit == 0 { lo } else { hi };
            Point3::new(
                pick(i, self.min_corner.x, self.max_corner.x),
                pick(j, self.min_corner.y, self.max_corner.y),
                pick(k, self.min_corner.z, self.max_corner.z),
            )
        };
        let slot = |(i, j, k): (usize, usize, usize)| i + 2 * j + 4 * k;

        let mut vertices = [VertexId::default(); 8];
        for k in 0..2 {
            for j in 0..2 {
                for i in 0..2 {
                    vertices[slot((i, j, k))] = store.add_vertex(VertexData::new(corner(i, j, k)));
                }
            }
        }

        // Edges always run from the lower slot to the higher one.
        let mut edges: HashMap<(usize, usize), EdgeId> = HashMap::with_capacity(12);
        let mut face_ids = Vec::with_capacity(6);
        for corners in &FACE_LOOPS {
            let mut oriented = Vec::with_capacity(4);
            for n in 0..4 {
                let a = slot(corners[n]);
                let b = slot(corners[(n + 1) % 4]);
                let key = (a.min(b), a.max(b));
                let edge = match edges.get(&key) {
                    Some(&edge) => edge,
                    None => {
                        let start = store.vertex(vertices[key.0])?.point;
                        let end = store.vertex(vertices[key.1])?.point;
                        let edge = store.add_edge(EdgeData {
                            start: vertices[key.0],
                            end: vertices[key.1],
                            curve: EdgeCurve::Line {
                                origin: start,
                                direction: (end - start).normalize(),
                            },
                        });
                        edges.insert(key, edge);
                        edge
                    }
                };
                oriented.push(OrientedEdge::new(edge, a < b));
            }
            let wire = store.add_wire(WireData {
                edges: oriented,
                is_closed: true,
            });
            face_ids.push(MakeFace::new(wire, vec![]).execute(store)?);
        }

        let shell = store.add_shell(ShellData {
            faces: face_ids,
            is_closed: true,
        });
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector3;
    use crate::topology::FaceSurface;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn faces_point_outward() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.solid(solid).unwrap().outer_shell;
        let centre = p(1.0, 1.0, 1.0);

        for &face in &store.shell(shell).unwrap().faces {
            let FaceSurface::Plane { origin, normal } = store.face(face).unwrap().surface else {
                panic!("box faces are planar");
            };
            assert!(normal.dot(&(origin - centre)) > 0.0, "normal {normal:?} points inward");
        }
    }

    #[test]
    fn first_face_is_min_x() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.solid(solid).unwrap().outer_shell;
        let first = store.shell(shell).unwrap().faces[0];
        let FaceSurface::Plane { normal, .. } = store.face(first).unwrap().surface else {
            panic!("box faces are planar");
        };
        assert_relative_eq!(normal, -Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn flat_box_is_rejected() {
        let mut store = TopologyStore::new();
        assert!(MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0))
            .execute(&mut store)
            .is_err());
    }
}
