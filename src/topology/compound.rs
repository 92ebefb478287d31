use super::shape::Shape;

slotmap::new_key_type! {
    /// Unique identifier for a compound in the topology store.
    pub struct CompoundId;
}

/// A group of placed shapes of any type, as produced for assemblies.
#[derive(Debug, Clone, Default)]
pub struct CompoundData {
    pub children: Vec<Shape>,
}
