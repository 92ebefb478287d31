//! Raw assembly documents, as handed over by an exchange-format reader.
//!
//! A document is a tree of tagged labels. Every label is addressed by its
//! entry, the tag path from the root (`"0:1:1:3"`). Fixed sections sit
//! under the main label `0:1`: shapes at `0:1:1` and the color table at
//! `0:1:2`.

mod label;
mod reader;

pub use label::{ColorRefs, LabelData, LabelId};
pub use reader::DocumentReader;

use slotmap::SlotMap;

use crate::color::{Color, ColorType};
use crate::error::{DocumentError, Result};
use crate::math::Location;
use crate::operations::creation::MakeCompound;
use crate::topology::{Shape, TopologyStore};

/// Name of the shapes section label.
pub const SHAPES_LABEL_NAME: &str = "Shapes";

/// Entry of the shapes section label.
pub const SHAPES_LABEL_ENTRY: &str = "0:1:1";

const COLORS_LABEL_NAME: &str = "Colors";

/// A label tree plus the topology its shapes point into.
#[derive(Debug)]
pub struct Document {
    labels: SlotMap<LabelId, LabelData>,
    root: LabelId,
    main: LabelId,
    shapes: LabelId,
    colors: LabelId,
    store: TopologyStore,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with empty shapes and colors sections.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(TopologyStore::new())
    }

    /// Creates a document whose shapes live in `store`.
    #[must_use]
    pub fn with_store(store: TopologyStore) -> Self {
        let mut labels = SlotMap::with_key();
        let root = labels.insert(LabelData::new(0, None));
        let main = labels.insert(LabelData::new(1, Some(root)));
        let mut shapes = LabelData::new(1, Some(main));
        shapes.name = Some(SHAPES_LABEL_NAME.to_owned());
        let shapes = labels.insert(shapes);
        let mut colors = LabelData::new(2, Some(main));
        colors.name = Some(COLORS_LABEL_NAME.to_owned());
        let colors = labels.insert(colors);

        labels[root].children.push(main);
        labels[main].children.extend([shapes, colors]);

        Self {
            labels,
            root,
            main,
            shapes,
            colors,
            store,
        }
    }

    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TopologyStore {
        &mut self.store
    }

    #[must_use]
    pub fn root_label(&self) -> LabelId {
        self.root
    }

    #[must_use]
    pub fn main_label(&self) -> LabelId {
        self.main
    }

    #[must_use]
    pub fn shapes_label(&self) -> LabelId {
        self.shapes
    }

    #[must_use]
    pub fn colors_label(&self) -> LabelId {
        self.colors
    }

    /// Returns the label data.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::LabelNotFound`] for a handle from another document.
    pub fn label(&self, id: LabelId) -> Result<&LabelData> {
        Ok(self
            .labels
            .get(id)
            .ok_or_else(|| DocumentError::LabelNotFound(format!("{id:?}")))?)
    }

    fn label_mut(&mut self, id: LabelId) -> Result<&mut LabelData> {
        Ok(self
            .labels
            .get_mut(id)
            .ok_or_else(|| DocumentError::LabelNotFound(format!("{id:?}")))?)
    }

    /// Child of `parent` with the given tag.
    #[must_use]
    pub fn find_child(&self, parent: LabelId, tag: u32) -> Option<LabelId> {
        let parent = self.labels.get(parent)?;
        parent
            .children
            .iter()
            .copied()
            .find(|&child| self.labels.get(child).is_some_and(|c| c.tag == tag))
    }

    /// Appends a child label tagged one past its last sibling.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in this document.
    pub fn new_child(&mut self, parent: LabelId) -> Result<LabelId> {
        let last_tag = match self.label(parent)?.children.last() {
            Some(&last) => self.label(last)?.tag,
            None => 0,
        };
        let child = self.labels.insert(LabelData::new(last_tag + 1, Some(parent)));
        self.label_mut(parent)?.children.push(child);
        Ok(child)
    }

    /// Tag path of a label from the document root, e.g. `"0:1:1:2"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the label or one of its ancestors is missing.
    pub fn entry(&self, id: LabelId) -> Result<String> {
        let mut tags = Vec::new();
        let mut current = Some(id);
        while let Some(label) = current {
            let data = self.label(label)?;
            tags.push(data.tag.to_string());
            current = data.parent;
        }
        tags.reverse();
        Ok(tags.join(":"))
    }

    /// Sets the display name of a label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not in this document.
    pub fn set_name(&mut self, id: LabelId, name: impl Into<String>) -> Result<()> {
        self.label_mut(id)?.name = Some(name.into());
        Ok(())
    }

    /// Attaches a shape to a label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not in this document.
    pub fn set_shape(&mut self, id: LabelId, shape: Shape) -> Result<()> {
        self.label_mut(id)?.shape = Some(shape);
        Ok(())
    }

    /// Sets a label's placement relative to its container.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not in this document.
    pub fn set_location(&mut self, id: LabelId, location: Location) -> Result<()> {
        self.label_mut(id)?.location = location;
        Ok(())
    }

    /// Adds a top-level shape definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes section is missing.
    pub fn add_shape(&mut self, shape: Shape) -> Result<LabelId> {
        let label = self.new_child(self.shapes)?;
        self.set_shape(label, shape)?;
        Ok(label)
    }

    /// Adds a top-level assembly. Its shape is built by
    /// [`Document::update_assembly`] once components are added.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes section is missing.
    pub fn add_assembly(&mut self) -> Result<LabelId> {
        self.new_child(self.shapes)
    }

    /// Places `definition` inside `assembly` at `location`.
    ///
    /// The new component label is an occurrence of `definition`: it carries
    /// the definition's shape moved by `location` and is registered among
    /// the definition's referrers.
    ///
    /// # Errors
    ///
    /// Returns an error if either label is not in this document.
    pub fn add_component(
        &mut self,
        assembly: LabelId,
        definition: LabelId,
        location: Location,
    ) -> Result<LabelId> {
        let shape = self.label(definition)?.shape.as_ref().map(|s| s.moved(&location));
        let component = self.new_child(assembly)?;
        {
            let data = self.label_mut(component)?;
            data.shape = shape;
            data.location = location;
            data.definition = Some(definition);
        }
        self.label_mut(definition)?.referrers.push(component);
        Ok(component)
    }

    /// Rebuilds an assembly's compound shape from its children's shapes.
    ///
    /// # Errors
    ///
    /// Returns an error if a label is missing or a child shape does not
    /// resolve in the store.
    pub fn update_assembly(&mut self, assembly: LabelId) -> Result<()> {
        let mut children = Vec::new();
        for &child in self.label(assembly)?.children() {
            if let Some(shape) = self.label(child)?.shape() {
                children.push(shape.clone());
            }
        }
        let compound = MakeCompound::new(children).execute(&mut self.store)?;
        self.set_shape(assembly, Shape::from(compound))
    }

    /// Finds or adds `color` in the color table.
    ///
    /// # Errors
    ///
    /// Returns an error if the color table is missing.
    pub fn add_color(&mut self, color: Color) -> Result<LabelId> {
        for &label in self.label(self.colors)?.children() {
            if self.label(label)?.color == Some(color) {
                return Ok(label);
            }
        }
        let label = self.new_child(self.colors)?;
        self.label_mut(label)?.color = Some(color);
        Ok(label)
    }

    /// Associates `color` with a label through `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not in this document.
    pub fn set_color(&mut self, id: LabelId, channel: ColorType, color: Color) -> Result<()> {
        self.label(id)?;
        let color_label = self.add_color(color)?;
        self.label_mut(id)?.color_refs.set(channel, color_label);
        Ok(())
    }

    /// Color stored on a color-table label.
    #[must_use]
    pub fn color(&self, color_label: LabelId) -> Option<Color> {
        self.labels.get(color_label).and_then(|data| data.color)
    }

    /// Color associated with a label through `channel`, if any.
    #[must_use]
    pub fn color_of(&self, id: LabelId, channel: ColorType) -> Option<Color> {
        let color_label = self.labels.get(id)?.color_refs.get(channel)?;
        self.color(color_label)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeBox;
    use crate::topology::ShapeType;

    fn box_definition(doc: &mut Document) -> LabelId {
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(doc.store_mut())
            .unwrap();
        doc.add_shape(Shape::from(solid)).unwrap()
    }

    #[test]
    fn fixed_sections_have_well_known_entries() {
        let doc = Document::new();
        assert_eq!(doc.entry(doc.root_label()).unwrap(), "0");
        assert_eq!(doc.entry(doc.main_label()).unwrap(), "0:1");
        assert_eq!(doc.entry(doc.shapes_label()).unwrap(), SHAPES_LABEL_ENTRY);
        assert_eq!(doc.entry(doc.colors_label()).unwrap(), "0:1:2");
        assert_eq!(
            doc.label(doc.shapes_label()).unwrap().name(),
            Some(SHAPES_LABEL_NAME)
        );
    }

    #[test]
    fn shapes_section_is_main_child_with_main_tag() {
        let doc = Document::new();
        let main_tag = doc.label(doc.main_label()).unwrap().tag();
        assert_eq!(doc.find_child(doc.main_label(), main_tag), Some(doc.shapes_label()));
    }

    #[test]
    fn child_tags_count_up_from_one() {
        let mut doc = Document::new();
        let a = doc.add_assembly().unwrap();
        let b = doc.add_assembly().unwrap();
        assert_eq!(doc.entry(a).unwrap(), "0:1:1:1");
        assert_eq!(doc.entry(b).unwrap(), "0:1:1:2");
        let nested = doc.new_child(b).unwrap();
        assert_eq!(doc.entry(nested).unwrap(), "0:1:1:2:1");
    }

    #[test]
    fn components_link_both_ways() {
        let mut doc = Document::new();
        let part = box_definition(&mut doc);
        let assembly = doc.add_assembly().unwrap();
        let offset = Location::from_translation(Vector3::new(2.0, 0.0, 0.0));
        let first = doc.add_component(assembly, part, offset).unwrap();
        let second = doc.add_component(assembly, part, Location::identity()).unwrap();

        assert_eq!(doc.label(first).unwrap().definition(), Some(part));
        assert_eq!(doc.label(part).unwrap().referrers(), [first, second]);
        assert!(doc.label(part).unwrap().has_reference_link());
        assert!(doc.label(first).unwrap().has_reference_link());
        assert!(!doc.label(assembly).unwrap().has_reference_link());
        assert_eq!(
            doc.label(first).unwrap().shape().unwrap().location().translation(),
            Vector3::new(2.0, 0.0, 0.0)
        );
    }

    #[test]
    fn assembly_shape_is_a_compound_of_components() {
        let mut doc = Document::new();
        let part = box_definition(&mut doc);
        let assembly = doc.add_assembly().unwrap();
        doc.add_component(assembly, part, Location::identity()).unwrap();
        doc.add_component(assembly, part, Location::identity()).unwrap();
        doc.update_assembly(assembly).unwrap();

        let shape = doc.label(assembly).unwrap().shape().unwrap().clone();
        assert_eq!(shape.shape_type(), ShapeType::Compound);
        let crate::topology::ShapeKind::Compound(id) = shape.kind() else {
            panic!("assembly shape is a compound");
        };
        assert_eq!(doc.store().compound(id).unwrap().children.len(), 2);
    }

    #[test]
    fn colors_are_shared_in_the_table() {
        let mut doc = Document::new();
        let a = box_definition(&mut doc);
        let b = box_definition(&mut doc);
        let red = Color::rgb(1.0, 0.0, 0.0);
        doc.set_color(a, ColorType::Surface, red).unwrap();
        doc.set_color(b, ColorType::Curve, red).unwrap();

        assert_eq!(doc.label(doc.colors_label()).unwrap().children().len(), 1);
        assert_eq!(doc.color_of(a, ColorType::Surface), Some(red));
        assert_eq!(doc.color_of(a, ColorType::Curve), None);
        assert_eq!(doc.color_of(b, ColorType::Curve), Some(red));
    }

    #[test]
    fn foreign_label_is_reported() {
        let doc = Document::new();
        let mut other = Document::new();
        let label = other.add_assembly().unwrap();
        // A fresh document only holds its four fixed labels.
        assert!(doc.label(label).is_err());
    }
}
