use crate::color::{Color, ColorType};
use crate::math::Location;
use crate::topology::Shape;

slotmap::new_key_type! {
    /// Handle to a label in a [`Document`](super::Document).
    pub struct LabelId;
}

/// Color associations of a label, one per channel. Each points at a label
/// in the document's color table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorRefs {
    generic: Option<LabelId>,
    surface: Option<LabelId>,
    curve: Option<LabelId>,
}

impl ColorRefs {
    #[must_use]
    pub fn get(&self, channel: ColorType) -> Option<LabelId> {
        match channel {
            ColorType::Generic => self.generic,
            ColorType::Surface => self.surface,
            ColorType::Curve => self.curve,
        }
    }

    pub fn set(&mut self, channel: ColorType, label: LabelId) {
        let slot = match channel {
            ColorType::Generic => &mut self.generic,
            ColorType::Surface => &mut self.surface,
            ColorType::Curve => &mut self.curve,
        };
        *slot = Some(label);
    }
}

/// One node of a raw assembly document.
///
/// A label that refers to a definition is an occurrence: it places the
/// definition's content at its own `location`. The definition lists all its
/// occurrences in `referrers`.
#[derive(Debug, Clone)]
pub struct LabelData {
    pub(super) tag: u32,
    pub(super) parent: Option<LabelId>,
    pub(super) children: Vec<LabelId>,
    pub(super) name: Option<String>,
    pub(super) shape: Option<Shape>,
    pub(super) location: Location,
    pub(super) color: Option<Color>,
    pub(super) definition: Option<LabelId>,
    pub(super) referrers: Vec<LabelId>,
    pub(super) color_refs: ColorRefs,
}

impl LabelData {
    pub(super) fn new(tag: u32, parent: Option<LabelId>) -> Self {
        Self {
            tag,
            parent,
            children: Vec::new(),
            name: None,
            shape: None,
            location: Location::identity(),
            color: None,
            definition: None,
            referrers: Vec::new(),
            color_refs: ColorRefs::default(),
        }
    }

    /// Position of the label among its siblings, 1-based for children.
    #[must_use]
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Containing label, `None` for the document root.
    #[must_use]
    pub fn parent(&self) -> Option<LabelId> {
        self.parent
    }

    /// Child labels in document order.
    #[must_use]
    pub fn children(&self) -> &[LabelId] {
        &self.children
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Shape as stored on the label, already moved by `location` for
    /// occurrences.
    #[must_use]
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Placement relative to the label that contains this occurrence.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The definition this label is an occurrence of.
    #[must_use]
    pub fn definition(&self) -> Option<LabelId> {
        self.definition
    }

    /// Occurrences pointing at this label, in the order they were added.
    #[must_use]
    pub fn referrers(&self) -> &[LabelId] {
        &self.referrers
    }

    /// Whether the label takes part in any shape reference.
    #[must_use]
    pub fn has_reference_link(&self) -> bool {
        self.definition.is_some() || !self.referrers.is_empty()
    }

    #[must_use]
    pub fn color_refs(&self) -> &ColorRefs {
        &self.color_refs
    }
}
