use std::io::Read;

use crate::error::ReadError;

use super::Document;

/// Turns an exchange file into a raw assembly [`Document`].
///
/// Implementations wrap an actual format parser; a failed read must not
/// produce a partial document.
pub trait DocumentReader {
    /// Reads `input`, whose origin is named by `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Malformed`] for input that is not a valid file,
    /// [`ReadError::NothingToTransfer`] when the file holds no shapes, and
    /// [`ReadError::Failed`] or [`ReadError::Io`] for other read failures.
    fn read(&self, file_name: &str, input: &mut dyn Read) -> Result<Document, ReadError>;
}
