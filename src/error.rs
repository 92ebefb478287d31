use thiserror::Error;

/// Top-level error type for assembly resolution and topology indexing.
#[derive(Debug, Error)]
pub enum AsmError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Errors related to the kernel topology store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to shape creation operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors raised while navigating a raw assembly document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("label not found: {0}")]
    LabelNotFound(String),

    #[error("document has no shapes section")]
    MissingShapesSection,
}

/// Errors raised by the ordered tree container.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("tree node not found")]
    NodeNotFound,
}

/// Failure modes surfaced by a document reader.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("not a valid document: {0}")]
    Malformed(String),

    #[error("nothing to transfer")]
    NothingToTransfer,

    #[error("reading has failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An import that did not produce a usable document.
#[derive(Debug, Error)]
#[error("import of `{file_name}` failed")]
pub struct ImportError {
    pub file_name: String,
    #[source]
    pub source: ReadError,
}

/// Convenience type alias for results using [`AsmError`].
pub type Result<T> = std::result::Result<T, AsmError>;
