use crate::error::{OperationError, Result, TopologyError};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{FaceData, FaceId, FaceSurface, TopologyStore, WireId};

/// Creates a planar face bounded by a closed polygonal wire.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation. The supporting plane passes through the
    /// outer wire's first vertex with the wire's Newell normal.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] if a boundary wire is open,
    /// or [`OperationError::Failed`] if the outer wire is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        for &wire in std::iter::once(&self.outer_wire).chain(&self.inner_wires) {
            if !store.wire(wire)?.is_closed {
                return Err(TopologyError::WireNotClosed.into());
            }
        }

        let points = wire_points(store, self.outer_wire)?;
        let normal = newell_normal(&points)?;

        Ok(store.add_face(FaceData {
            surface: FaceSurface::Plane {
                origin: points[0],
                normal,
            },
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }
}

/// Vertex positions of a wire in traversal order.
fn wire_points(store: &TopologyStore, wire: WireId) -> Result<Vec<Point3>> {
    let wire = store.wire(wire)?;
    let mut points = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let edge = store.edge(oe.edge)?;
        let vertex = if oe.forward { edge.start } else { edge.end };
        points.push(store.vertex(vertex)?.point);
    }
    Ok(points)
}

/// Unit normal of a polygon using Newell's method.
fn newell_normal(points: &[Point3]) -> Result<Vector3> {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(
            OperationError::Failed("degenerate polygon: cannot compute normal".into()).into(),
        );
    }
    Ok(normal / len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::AsmError;
    use crate::operations::creation::MakeWire;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn counter_clockwise_square_faces_up() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();

        let FaceSurface::Plane { normal, .. } = &store.face(face).unwrap().surface else {
            panic!("expected a planar face");
        };
        assert_relative_eq!(*normal, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn open_wire_is_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let result = MakeFace::new(wire, vec![]).execute(&mut store);
        assert!(matches!(
            result,
            Err(AsmError::Topology(TopologyError::WireNotClosed))
        ));
    }

    #[test]
    fn collinear_wire_is_degenerate() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)], true)
            .execute(&mut store)
            .unwrap();
        let result = MakeFace::new(wire, vec![]).execute(&mut store);
        assert!(matches!(result, Err(AsmError::Operation(OperationError::Failed(_)))));
    }
}
