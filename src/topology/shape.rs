use std::fmt;

use crate::math::Location;

use super::{CompoundId, EdgeId, FaceId, ShellId, SolidId, VertexId, WireId};

/// Classification of a shape by its topological level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Compound,
    Solid,
    Shell,
    Face,
    Wire,
    Edge,
    Vertex,
}

impl ShapeType {
    /// Human-readable type name used in tree reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Compound => "Compound",
            Self::Solid => "Solid",
            Self::Shell => "Shell",
            Self::Face => "Face",
            Self::Wire => "Wire",
            Self::Edge => "Edge",
            Self::Vertex => "Vertex",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The store entity a shape points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Compound(CompoundId),
    Solid(SolidId),
    Shell(ShellId),
    Face(FaceId),
    Wire(WireId),
    Edge(EdgeId),
    Vertex(VertexId),
}

impl ShapeKind {
    #[must_use]
    pub fn shape_type(self) -> ShapeType {
        match self {
            Self::Compound(_) => ShapeType::Compound,
            Self::Solid(_) => ShapeType::Solid,
            Self::Shell(_) => ShapeType::Shell,
            Self::Face(_) => ShapeType::Face,
            Self::Wire(_) => ShapeType::Wire,
            Self::Edge(_) => ShapeType::Edge,
            Self::Vertex(_) => ShapeType::Vertex,
        }
    }
}

/// A lightweight handle to topology in a [`TopologyStore`](super::TopologyStore)
/// together with a placement.
///
/// Copies of a shape share the underlying topology; only the handle and the
/// placement are duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    location: Location,
}

impl Shape {
    /// A shape at the identity placement.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            location: Location::identity(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    /// The same topology with its placement replaced by `location`.
    #[must_use]
    pub fn located(&self, location: Location) -> Shape {
        Self {
            kind: self.kind,
            location,
        }
    }

    /// The same topology with `location` applied on top of the current placement.
    #[must_use]
    pub fn moved(&self, location: &Location) -> Shape {
        Self {
            kind: self.kind,
            location: location.compose(&self.location),
        }
    }

    /// Whether both handles point at the same topology, ignoring placement.
    #[must_use]
    pub fn is_partner(&self, other: &Shape) -> bool {
        self.kind == other.kind
    }
}

macro_rules! shape_from_id {
    ($($id:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$id> for Shape {
                fn from(id: $id) -> Self {
                    Shape::new(ShapeKind::$variant(id))
                }
            }
        )*
    };
}

shape_from_id! {
    CompoundId => Compound,
    SolidId => Solid,
    ShellId => Shell,
    FaceId => Face,
    WireId => Wire,
    EdgeId => Edge,
    VertexId => Vertex,
}
