use std::ops::Mul;

use nalgebra::{Rotation3, Unit};

use super::{Matrix4, Vector3, TOLERANCE};

/// Placement of a shape in its parent's coordinate system.
///
/// Composition follows matrix order: `parent * local` maps local
/// coordinates into the parent's frame first applying `local`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    matrix: Matrix4,
}

impl Default for Location {
    fn default() -> Self {
        Self::identity()
    }
}

impl Location {
    /// The identity placement.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn from_translation(offset: Vector3) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// A rotation of `angle` radians about `axis` through the origin.
    ///
    /// A zero-length axis yields the identity.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        if axis.norm() < TOLERANCE {
            return Self::identity();
        }
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Returns `self * local`.
    #[must_use]
    pub fn compose(&self, local: &Location) -> Location {
        Self {
            matrix: self.matrix * local.matrix,
        }
    }

    /// Whether this placement is the identity within [`TOLERANCE`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix.is_identity(TOLERANCE)
    }

    /// The translation part of the placement.
    #[must_use]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }
}

impl Mul for Location {
    type Output = Location;

    fn mul(self, rhs: Location) -> Location {
        self.compose(&rhs)
    }
}
