use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeCurve, EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a polyline wire from a sequence of 3D points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating one vertex per point and one line
    /// edge per consecutive pair (plus a closing edge when `close` is set).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if there are too few points
    /// or two consecutive points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {min_points} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let n = self.points.len();
        let segment_count = if self.close { n } else { n - 1 };
        for i in 0..segment_count {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if (b - a).norm() < TOLERANCE {
                return Err(OperationError::InvalidInput(format!(
                    "points {i} and {} coincide",
                    (i + 1) % n
                ))
                .into());
            }
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        let edges = (0..segment_count)
            .map(|i| {
                let j = (i + 1) % n;
                let edge = store.add_edge(EdgeData {
                    start: vertices[i],
                    end: vertices[j],
                    curve: EdgeCurve::Line {
                        origin: self.points[i],
                        direction: (self.points[j] - self.points[i]).normalize(),
                    },
                });
                OrientedEdge::new(edge, true)
            })
            .collect();

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn closed_triangle_has_three_edges() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)], true)
            .execute(&mut store)
            .unwrap();
        let data = store.wire(wire).unwrap();
        assert_eq!(data.edges.len(), 3);
        assert!(data.is_closed);

        let last = store.edge(data.edges[2].edge).unwrap();
        let first = store.edge(data.edges[0].edge).unwrap();
        assert_eq!(last.end, first.start);
    }

    #[test]
    fn open_polyline_has_one_edge_less() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.wire(wire).unwrap().edges.len(), 2);
    }

    #[test]
    fn coincident_points_are_rejected() {
        let mut store = TopologyStore::new();
        let result = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0)], false).execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn closed_wire_needs_three_points() {
        let mut store = TopologyStore::new();
        let result = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], true).execute(&mut store);
        assert!(result.is_err());
    }
}
