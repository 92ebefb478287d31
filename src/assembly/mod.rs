//! Resolution of a raw assembly document into a tree of placed parts.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::color::{Color, ColorType};
use crate::document::{Document, LabelData, LabelId, SHAPES_LABEL_ENTRY, SHAPES_LABEL_NAME};
use crate::error::{DocumentError, Result, TreeError};
use crate::math::Location;
use crate::part::{Part, Presentation};
use crate::tree::{NodeId, Tree};

/// Name of the synthetic part every resolved tree is rooted at.
pub const ROOT_PART_NAME: &str = "Root";

/// Walks a document depth-first and builds one part per content label.
///
/// Occurrences are followed to their definitions with their placements
/// accumulated on the way, so a definition placed `n` times yields `n`
/// parts sharing its topology. Children keep document order.
pub struct ResolveAssembly<'a> {
    document: &'a Document,
}

impl<'a> ResolveAssembly<'a> {
    /// Creates a new `ResolveAssembly` operation.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Executes the resolution, returning a fresh tree rooted at a part
    /// named [`ROOT_PART_NAME`].
    ///
    /// Labels that cannot be named or shaped are recovered locally and never
    /// abort the walk. Reference chains are trusted to be acyclic.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingShapesSection`] if the document has no
    /// shapes section, or a lookup error for dangling label handles.
    pub fn execute(&self) -> Result<Tree<Part>> {
        let mut tree = Tree::new();
        let root = tree.insert(Part::new(ROOT_PART_NAME), None)?;

        let main = self.document.main_label();
        let main_tag = self.document.label(main)?.tag();
        let shapes = self
            .document
            .find_child(main, main_tag)
            .ok_or(DocumentError::MissingShapesSection)?;
        let shapes_tag = self.document.label(shapes)?.tag();

        self.visit(&mut tree, shapes, root, shapes_tag, &Location::identity(), false)?;
        info!(parts = tree.len(), "assembly resolved");
        Ok(tree)
    }

    /// `tag` is the tag of the label the walk arrived through, which for a
    /// definition reached from an occurrence is the occurrence's tag.
    fn visit(
        &self,
        tree: &mut Tree<Part>,
        label: LabelId,
        parent: NodeId,
        tag: u32,
        location: &Location,
        via_definition: bool,
    ) -> Result<()> {
        let data = self.document.label(label)?;

        if data.has_reference_link() {
            // A referenced definition is produced through each of its
            // occurrences. This assumes every definition is reachable through
            // at least one occurrence that the walk visits.
            if !data.referrers().is_empty() && !via_definition {
                trace!(?label, "skipping definition outside its reference chain");
                return Ok(());
            }
            if let Some(definition) = data.definition() {
                let accumulated = location.compose(data.location());
                return self.visit(tree, definition, parent, tag, &accumulated, true);
            }
        }

        let node = self.add_part(tree, label, data, parent, tag, location)?;
        for &child in data.children() {
            let child_tag = self.document.label(child)?.tag();
            self.visit(tree, child, node, child_tag, location, false)?;
        }
        Ok(())
    }

    /// Inserts the part for `label` under `parent` and returns its node.
    /// The shapes section itself yields no part, so `parent` is returned.
    fn add_part(
        &self,
        tree: &mut Tree<Part>,
        label: LabelId,
        data: &LabelData,
        parent: NodeId,
        tag: u32,
        location: &Location,
    ) -> Result<NodeId> {
        let entry = self.document.entry(label)?;
        let name = data.name().unwrap_or_default();
        debug!(%entry, name, "visiting label");

        if name == SHAPES_LABEL_NAME || entry == SHAPES_LABEL_ENTRY {
            return Ok(parent);
        }

        let name = if name.is_empty() {
            let parent_name = tree.get(parent).ok_or(TreeError::NodeNotFound)?.name();
            format!("{parent_name}{tag}")
        } else {
            name.to_owned()
        };

        let mut part = Part::new(name);
        if let Some(shape) = data.shape() {
            match self.document.store().shape_type(shape) {
                Ok(_) => {
                    let color = self.resolve_color(label);
                    part.set_color(color);
                    part.set_shape(Arc::new(Presentation::new(shape.located(*location), color)));
                }
                Err(err) => {
                    warn!(%entry, error = %err, "label shape does not resolve, leaving part unshaped");
                }
            }
        }

        Ok(tree.insert(part, Some(parent))?)
    }

    /// Surface color if associated, light gray otherwise. Generic and curve
    /// colors are looked up but not applied.
    fn resolve_color(&self, label: LabelId) -> Color {
        for channel in [ColorType::Generic, ColorType::Curve] {
            if let Some(color) = self.document.color_of(label, channel) {
                trace!(?label, ?channel, ?color, "color channel not applied");
            }
        }
        self.document
            .color_of(label, ColorType::Surface)
            .unwrap_or(Color::LIGHT_GRAY)
    }
}
