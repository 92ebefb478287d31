use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a shell in the topology store.
    pub struct ShellId;
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Faces stitched along shared edges. A solid needs it closed.
#[derive(Debug, Clone)]
pub struct ShellData {
    /// Faces of the shell in stored order.
    pub faces: Vec<FaceId>,
    /// Whether every edge bounds exactly two faces of the shell.
    pub is_closed: bool,
}

/// A volume bounded by an outer shell, minus the voids of its inner shells.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Outer boundary of the volume.
    pub outer_shell: ShellId,
    /// Void boundaries.
    pub inner_shells: Vec<ShellId>,
}

impl SolidData {
    /// Bounding shells, outer first.
    pub fn shells(&self) -> impl Iterator<Item = ShellId> + '_ {
        std::iter::once(self.outer_shell).chain(self.inner_shells.iter().copied())
    }
}
