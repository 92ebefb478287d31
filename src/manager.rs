//! Application driver tying a document reader, the resolved part tree and a
//! viewer together.

use std::io::Read;
use std::sync::Arc;

use tracing::{info, warn};

use crate::assembly::ResolveAssembly;
use crate::document::{Document, DocumentReader};
use crate::error::{ImportError, Result, TopologyError};
use crate::part::{Part, Presentation};
use crate::topology::explore;
use crate::tree::{NodeId, Tree};
use crate::viewer::{SelectionMode, Viewer};

/// Owns the current document and its resolved tree.
///
/// A failed import leaves both untouched.
pub struct AssemblyManager<R> {
    reader: R,
    document: Option<Document>,
    tree: Tree<Part>,
}

impl<R: DocumentReader> AssemblyManager<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            document: None,
            tree: Tree::new(),
        }
    }

    /// The last successfully imported document.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn tree(&self) -> &Tree<Part> {
        &self.tree
    }

    /// Reads `input` and replaces the current tree with its resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::Import`](crate::AsmError::Import) if the reader
    /// fails, or a resolution error. The previous document and tree are
    /// kept in both cases.
    pub fn import(&mut self, file_name: &str, input: &mut dyn Read) -> Result<()> {
        info!(file_name, "importing document");
        let document = match self.reader.read(file_name, input) {
            Ok(document) => document,
            Err(source) => {
                warn!(file_name, error = %source, "import failed");
                return Err(ImportError {
                    file_name: file_name.to_owned(),
                    source,
                }
                .into());
            }
        };

        let tree = ResolveAssembly::new(&document).execute()?;
        self.document = Some(document);
        self.tree = tree;
        Ok(())
    }

    /// Imports, displays, indexes and reports in one go, returning the
    /// tree report.
    ///
    /// # Errors
    ///
    /// Returns the first error of the import or indexing step.
    pub fn open(
        &mut self,
        file_name: &str,
        input: &mut dyn Read,
        viewer: &mut dyn Viewer,
    ) -> Result<String> {
        self.import(file_name, input)?;
        self.display_all(viewer);
        self.build_all_index_maps()?;
        Ok(self.report())
    }

    /// Hands every solid part to `viewer`. Returns how many were shown.
    pub fn display_all(&self, viewer: &mut dyn Viewer) -> usize {
        let solids = self.solid_presentations();
        for shape in &solids {
            viewer.display(shape);
        }
        solids.len()
    }

    /// Builds index maps on every solid part, returning how many were
    /// indexed.
    ///
    /// # Errors
    ///
    /// Returns the first indexing failure. Parts after it are not indexed.
    pub fn build_all_index_maps(&mut self) -> Result<usize> {
        let (Some(document), Some(root)) = (self.document.as_ref(), self.tree.root()) else {
            return Ok(0);
        };

        let store = document.store();
        let mut indexed = 0;
        let mut failure: Option<TopologyError> = None;
        self.tree.traverse_mut(root, |_, part, _| {
            if failure.is_some() {
                return;
            }
            match part.build_index_maps(store) {
                Ok(true) => indexed += 1,
                Ok(false) => {}
                Err(err) => failure = Some(err),
            }
        });

        match failure {
            Some(err) => Err(err.into()),
            None => {
                info!(parts = indexed, "index maps built");
                Ok(indexed)
            }
        }
    }

    /// One line per part in traversal order: a dash per depth level, the
    /// name, the id in brackets and the shape type if any.
    pub fn report(&self) -> String {
        let Some(root) = self.tree.root() else {
            return String::new();
        };

        let mut lines = Vec::new();
        self.tree.traverse(root, |_, part, depth| {
            let mut line = format!("{}{}[{}]", "-".repeat(depth), part.name(), part.id());
            if let Some(shape_type) = part.shape_type() {
                line.push_str(", ");
                line.push_str(shape_type.name());
            }
            info!("{line}");
            lines.push(line);
        });
        lines.join("\n")
    }

    /// Lists, for every indexed part, each face with its edges and their
    /// end vertices by index. Unknown sub-shapes report index 0.
    ///
    /// # Errors
    ///
    /// Returns an error if a part's topology is missing from the store.
    pub fn index_report(&self) -> Result<String> {
        let Some(document) = self.document.as_ref() else {
            return Ok(String::new());
        };
        let store = document.store();

        let mut lines = Vec::new();
        for id in self.solid_nodes() {
            let Some(part) = self.tree.get(id) else {
                continue;
            };
            let (Some(shape), Some(faces), Some(edges), Some(vertices)) = (
                part.shape(),
                part.face_map(),
                part.edge_map(),
                part.vertex_map(),
            ) else {
                continue;
            };

            for face in explore::faces(store, shape.shape())? {
                lines.push(format!("Face Index: {}", faces.find_index(face).unwrap_or(0)));
                for edge in explore::face_edges(store, face)? {
                    lines.push(format!("- Edge Index: {}", edges.find_index(edge).unwrap_or(0)));
                    let (first, last) = explore::edge_vertices(store, edge)?;
                    lines.push(format!(
                        "-- Vertex1 Index: {}",
                        vertices.find_index(first).unwrap_or(0)
                    ));
                    lines.push(format!(
                        "-- Vertex2 Index: {}",
                        vertices.find_index(last).unwrap_or(0)
                    ));
                }
            }
        }
        Ok(lines.join("\n"))
    }

    /// Switches every solid part from the viewer's current mode to `mode`,
    /// then records `mode` on the viewer.
    pub fn set_selection_mode(&self, viewer: &mut dyn Viewer, mode: SelectionMode) {
        for shape in self.solid_presentations() {
            let current = viewer.selection_mode();
            viewer.deactivate(shape, current);
            viewer.activate(shape, mode);
        }
        viewer.set_selection_mode(mode);
        info!("{mode}");
    }

    pub fn select_vertex_mode(&self, viewer: &mut dyn Viewer) {
        self.set_selection_mode(viewer, SelectionMode::Vertex);
    }

    pub fn select_edge_mode(&self, viewer: &mut dyn Viewer) {
        self.set_selection_mode(viewer, SelectionMode::Edge);
    }

    pub fn select_face_mode(&self, viewer: &mut dyn Viewer) {
        self.set_selection_mode(viewer, SelectionMode::Face);
    }

    pub fn select_solid_mode(&self, viewer: &mut dyn Viewer) {
        self.set_selection_mode(viewer, SelectionMode::Solid);
    }

    fn solid_nodes(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        if let Some(root) = self.tree.root() {
            self.tree.traverse(root, |id, part, _| {
                if part.is_solid() {
                    ids.push(id);
                }
            });
        }
        ids
    }

    fn solid_presentations(&self) -> Vec<&Arc<Presentation>> {
        self.solid_nodes()
            .into_iter()
            .filter_map(|id| self.tree.get(id))
            .filter_map(Part::shape)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::{AsmError, ReadError};
    use crate::math::{Location, Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCylinder};
    use crate::topology::{Shape, ShapeKind};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Understands three inputs: `bracket`, `block` and an empty file.
    struct FixtureReader;

    impl FixtureReader {
        fn bracket() -> Document {
            let mut doc = Document::new();
            let plate = MakeBox::new(Point3::origin(), Point3::new(4.0, 2.0, 0.5))
                .execute(doc.store_mut())
                .unwrap();
            let plate = doc.add_shape(Shape::from(plate)).unwrap();
            doc.set_name(plate, "Plate").unwrap();
            let pin = MakeCylinder::new(Point3::origin(), 0.2, Vector3::z(), 1.0)
                .execute(doc.store_mut())
                .unwrap();
            let pin = doc.add_shape(Shape::from(pin)).unwrap();
            doc.set_name(pin, "Pin").unwrap();

            let bracket = doc.add_assembly().unwrap();
            doc.set_name(bracket, "Bracket").unwrap();
            doc.add_component(bracket, plate, Location::identity()).unwrap();
            for x in [1.0, 3.0] {
                let at = Location::from_translation(Vector3::new(x, 1.0, 0.5));
                doc.add_component(bracket, pin, at).unwrap();
            }
            doc.update_assembly(bracket).unwrap();
            doc
        }

        fn block() -> Document {
            let mut doc = Document::new();
            let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
                .execute(doc.store_mut())
                .unwrap();
            let label = doc.add_shape(Shape::from(solid)).unwrap();
            doc.set_name(label, "Block").unwrap();
            doc
        }
    }

    impl DocumentReader for FixtureReader {
        fn read(
            &self,
            _file_name: &str,
            input: &mut dyn Read,
        ) -> std::result::Result<Document, ReadError> {
            let mut content = String::new();
            input.read_to_string(&mut content)?;
            match content.trim() {
                "" => Err(ReadError::NothingToTransfer),
                "bracket" => Ok(Self::bracket()),
                "block" => Ok(Self::block()),
                other => Err(ReadError::Malformed(format!("unexpected content `{other}`"))),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Display(ShapeKind),
        Activate(ShapeKind, SelectionMode),
        Deactivate(ShapeKind, SelectionMode),
    }

    #[derive(Default)]
    struct RecordingViewer {
        events: Vec<Event>,
        mode: SelectionMode,
    }

    impl Viewer for RecordingViewer {
        fn display(&mut self, shape: &Arc<Presentation>) {
            self.events.push(Event::Display(shape.shape().kind()));
        }

        fn activate(&mut self, shape: &Arc<Presentation>, mode: SelectionMode) {
            self.events.push(Event::Activate(shape.shape().kind(), mode));
        }

        fn deactivate(&mut self, shape: &Arc<Presentation>, mode: SelectionMode) {
            self.events.push(Event::Deactivate(shape.shape().kind(), mode));
        }

        fn selection_mode(&self) -> SelectionMode {
            self.mode
        }

        fn set_selection_mode(&mut self, mode: SelectionMode) {
            self.mode = mode;
        }
    }

    fn opened(content: &str) -> (AssemblyManager<FixtureReader>, RecordingViewer, String) {
        init_tracing();
        let mut manager = AssemblyManager::new(FixtureReader);
        let mut viewer = RecordingViewer::default();
        let report = manager
            .open("fixture.step", &mut Cursor::new(content), &mut viewer)
            .unwrap();
        (manager, viewer, report)
    }

    #[test]
    fn open_reports_tree_with_depth_dashes() {
        let (manager, _, report) = opened("bracket");
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 5);

        let tree = manager.tree();
        let root = tree.root().unwrap();
        let root_part = tree.get(root).unwrap();
        assert_eq!(lines[0], format!("Root[{}]", root_part.id()));
        assert!(lines[1].starts_with("-Bracket[") && lines[1].ends_with("], Compound"));
        assert!(lines[2].starts_with("--Plate[") && lines[2].ends_with("], Solid"));
        assert!(lines[3].starts_with("--Pin["));
        assert!(lines[4].starts_with("--Pin["));
    }

    #[test]
    fn open_displays_and_indexes_solids_only() {
        let (manager, viewer, _) = opened("bracket");
        assert_eq!(viewer.events.len(), 3);
        assert!(viewer.events.iter().all(|e| matches!(e, Event::Display(ShapeKind::Solid(_)))));

        let tree = manager.tree();
        let mut counts = Vec::new();
        tree.traverse(tree.root().unwrap(), |_, part, _| {
            counts.push(part.face_map().map(|faces| faces.len()));
        });
        assert_eq!(counts, [None, None, Some(6), Some(3), Some(3)]);
    }

    #[test]
    fn index_report_walks_faces_edges_and_vertices() {
        let (manager, _, _) = opened("block");
        let report = manager.index_report().unwrap();
        let lines: Vec<_> = report.lines().collect();

        // 6 faces, each with 4 edges of 3 lines.
        assert_eq!(lines.len(), 6 + 6 * 4 * 3);
        assert_eq!(lines[0], "Face Index: 1");
        assert_eq!(lines[1], "- Edge Index: 1");
        assert!(lines[2].starts_with("-- Vertex1 Index: "));
        assert_eq!(lines.iter().filter(|l| l.starts_with("Face")).count(), 6);
        assert!(lines.iter().all(|l| !l.ends_with(": 0")));
    }

    #[test]
    fn selection_switch_deactivates_previous_mode() {
        let (manager, mut viewer, _) = opened("block");
        viewer.events.clear();

        manager.select_edge_mode(&mut viewer);
        manager.select_face_mode(&mut viewer);
        assert_eq!(viewer.mode, SelectionMode::Face);

        let kind = viewer_kind(&manager);
        assert_eq!(
            viewer.events,
            [
                Event::Deactivate(kind, SelectionMode::Solid),
                Event::Activate(kind, SelectionMode::Edge),
                Event::Deactivate(kind, SelectionMode::Edge),
                Event::Activate(kind, SelectionMode::Face),
            ]
        );
    }

    fn viewer_kind(manager: &AssemblyManager<FixtureReader>) -> ShapeKind {
        manager.solid_presentations()[0].shape().kind()
    }

    #[test]
    fn failed_import_keeps_previous_state() {
        let (mut manager, _, before) = opened("block");

        let err = match manager.import("broken.step", &mut Cursor::new("garbage")) {
            Err(AsmError::Import(err)) => err,
            other => panic!("expected an import error, got {other:?}"),
        };
        assert_eq!(err.file_name, "broken.step");
        assert!(matches!(err.source, ReadError::Malformed(_)));

        assert!(matches!(
            manager.import("empty.step", &mut Cursor::new("")),
            Err(AsmError::Import(ImportError {
                source: ReadError::NothingToTransfer,
                ..
            }))
        ));
        assert_eq!(manager.report(), before);
        assert!(manager.document().is_some());
    }

    #[test]
    fn reimport_replaces_tree() {
        let (mut manager, _, _) = opened("bracket");
        manager.import("block.step", &mut Cursor::new("block")).unwrap();
        assert_eq!(manager.tree().len(), 2);
        assert_eq!(manager.build_all_index_maps().unwrap(), 1);
    }

    #[test]
    fn empty_manager_does_nothing() {
        let mut manager = AssemblyManager::new(FixtureReader);
        let mut viewer = RecordingViewer::default();
        assert_eq!(manager.display_all(&mut viewer), 0);
        assert_eq!(manager.build_all_index_maps().unwrap(), 0);
        assert!(manager.report().is_empty());
        assert!(manager.index_report().unwrap().is_empty());
        manager.select_vertex_mode(&mut viewer);
        assert_eq!(viewer.mode, SelectionMode::Vertex);
        assert!(viewer.events.is_empty());
    }
}
