use crate::error::Result;
use crate::topology::{CompoundData, CompoundId, Shape, TopologyStore};

/// Groups placed shapes into a compound, as assemblies are represented.
pub struct MakeCompound {
    children: Vec<Shape>,
}

impl MakeCompound {
    /// Creates a new `MakeCompound` operation.
    #[must_use]
    pub fn new(children: Vec<Shape>) -> Self {
        Self { children }
    }

    /// Executes the operation, creating the compound in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`](crate::error::TopologyError::EntityNotFound) if a child is not in the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<CompoundId> {
        for child in &self.children {
            store.shape_type(child)?;
        }
        Ok(store.add_compound(CompoundData {
            children: self.children.clone(),
        }))
    }
}
