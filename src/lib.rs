//! Resolution of hierarchical CAD assembly documents into trees of placed
//! parts, with stable per-part numbering of faces, edges and vertices.

pub mod assembly;
pub mod color;
pub mod document;
pub mod error;
pub mod manager;
pub mod math;
pub mod operations;
pub mod part;
pub mod topology;
pub mod tree;
pub mod viewer;

pub use assembly::ResolveAssembly;
pub use error::{AsmError, Result};
pub use manager::AssemblyManager;
pub use part::{Part, PartId};
pub use tree::{NodeId, Tree};
pub use viewer::{SelectionMode, Viewer};
