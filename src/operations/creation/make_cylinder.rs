use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, FaceData, FaceSurface, OrientedEdge, ShellData, SolidId, TopologyStore,
    VertexData, WireData,
};

use super::MakeSolid;

/// Creates a cylinder solid from base center, radius, axis, and height.
///
/// Topology follows the usual kernel layout: a lateral face closed by a
/// seam edge, then the top and bottom discs. That is 3 faces, 3 edges
/// (two circles and the seam) and 2 vertices.
pub struct MakeCylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
    height: f64,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64, axis: Vector3, height: f64) -> Self {
        Self {
            center,
            radius,
            axis,
            height,
        }
    }

    /// Executes the operation, creating the cylinder in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the radius or height is
    /// near zero, or the axis is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.radius < TOLERANCE || self.height < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "cylinder radius and height must be positive, got {} and {}",
                self.radius, self.height
            ))
            .into());
        }
        if self.axis.norm() < TOLERANCE {
            return Err(OperationError::InvalidInput("cylinder axis must be non-zero".into()).into());
        }

        let axis = self.axis.normalize();
        let reference = if axis.x.abs() < 0.9 { Vector3::x() } else { Vector3::y() };
        let radial = (reference - axis * reference.dot(&axis)).normalize();
        let top_center = self.center + axis * self.height;

        let bottom_point = self.center + radial * self.radius;
        let top_point = top_center + radial * self.radius;
        let bottom_vertex = store.add_vertex(VertexData::new(bottom_point));
        let top_vertex = store.add_vertex(VertexData::new(top_point));

        let bottom_circle = store.add_edge(EdgeData {
            start: bottom_vertex,
            end: bottom_vertex,
            curve: EdgeCurve::Circle {
                center: self.center,
                axis,
                radius: self.radius,
            },
        });
        let top_circle = store.add_edge(EdgeData {
            start: top_vertex,
            end: top_vertex,
            curve: EdgeCurve::Circle {
                center: top_center,
                axis,
                radius: self.radius,
            },
        });
        let seam = store.add_edge(EdgeData {
            start: bottom_vertex,
            end: top_vertex,
            curve: EdgeCurve::Line {
                origin: bottom_point,
                direction: axis,
            },
        });

        let lateral_wire = store.add_wire(WireData {
            edges: vec![
                OrientedEdge::new(bottom_circle, true),
                OrientedEdge::new(seam, true),
                OrientedEdge::new(top_circle, false),
                OrientedEdge::new(seam, false),
            ],
            is_closed: true,
        });
        let top_wire = store.add_wire(WireData {
            edges: vec![OrientedEdge::new(top_circle, true)],
            is_closed: true,
        });
        let bottom_wire = store.add_wire(WireData {
            edges: vec![OrientedEdge::new(bottom_circle, false)],
            is_closed: true,
        });

        let lateral = store.add_face(FaceData {
            surface: FaceSurface::Cylinder {
                origin: self.center,
                axis,
                radius: self.radius,
            },
            outer_wire: lateral_wire,
            inner_wires: vec![],
            same_sense: true,
        });
        let top = store.add_face(FaceData {
            surface: FaceSurface::Plane {
                origin: top_center,
                normal: axis,
            },
            outer_wire: top_wire,
            inner_wires: vec![],
            same_sense: true,
        });
        let bottom = store.add_face(FaceData {
            surface: FaceSurface::Plane {
                origin: self.center,
                normal: -axis,
            },
            outer_wire: bottom_wire,
            inner_wires: vec![],
            same_sense: true,
        });

        let shell = store.add_shell(ShellData {
            faces: vec![lateral, top, bottom],
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

    #[test]
    fn seam_runs_along_axis() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(Point3::origin(), 2.0, Vector3::z(), 5.0)
            .execute(&mut store)
            .unwrap();
        let shell = store.solid(solid).unwrap().outer_shell;
        let lateral = store.shell(shell).unwrap().faces[0];
        let wire = store.face(lateral).unwrap().outer_wire;
        let seam = store.wire(wire).unwrap().edges[1].edge;
        let seam = store.edge(seam).unwrap();

        let start = store.vertex(seam.start).unwrap().point;
        let end = store.vertex(seam.end).unwrap().point;
        assert_relative_eq!(end - start, Vector3::new(0.0, 0.0, 5.0), epsilon = 1e-12);
        assert_relative_eq!(start.coords.norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn circles_are_closed_edges() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(Point3::origin(), 1.0, Vector3::x(), 1.0)
            .execute(&mut store)
            .unwrap();
        let shell = store.solid(solid).unwrap().outer_shell;
        let top = store.shell(shell).unwrap().faces[1];
        let wire = store.face(top).unwrap().outer_wire;
        let circle = store.wire(wire).unwrap().edges[0].edge;
        assert!(store.edge(circle).unwrap().is_closed());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let mut store = TopologyStore::new();
        assert!(MakeCylinder::new(Point3::origin(), 0.0, Vector3::z(), 1.0)
            .execute(&mut store)
            .is_err());
    }
}
