//! Interfaces to the external collaborators: the documentation-extraction
//! engine and the caller's project handle.

use crate::error::Error;
use crate::tags::TagRegistry;
use crate::types::Document;

/// Invocation contract for one extraction run.
#[derive(Debug)]
pub struct ExtractOptions<'a> {
    /// Input root directory paths the extraction is scoped to.
    pub paths: &'a [String],
    /// Project name forwarded to the engine.
    pub project_name: &'a str,
    /// Suppress the engine's own console output.
    pub quiet: bool,
    /// Extended tag registry the engine consults for tag recognition
    /// and digestion.
    pub registry: &'a TagRegistry,
    /// Whether the engine should persist its output itself. Always off —
    /// the document comes back in memory and is normalized there.
    pub write_json: bool,
}

/// The external engine that parses source comments into a [`Document`].
/// Treated as a black box: given roots and options, it returns the raw
/// document with absolute paths as collection keys.
pub trait ExtractionEngine {
    /// Run extraction over the configured roots.
    ///
    /// # Errors
    ///
    /// Returns `Error::Extraction` if the engine fails before producing a
    /// document, or `Error::DocumentDecode` if its raw output does not
    /// decode. Errors propagate to the caller uncaught.
    fn extract(&self, options: &ExtractOptions<'_>) -> Result<Document, Error>;
}

/// The caller's project handle: a name accessor and a warning-line sink.
pub trait Project {
    /// Project name handed to the engine.
    fn name(&self) -> &str;

    /// Receive one formatted warning line.
    fn write_warn_line(&self, line: &str);
}
