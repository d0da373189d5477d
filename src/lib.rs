//! docnorm — post-processing for extracted documentation metadata.
//!
//! An external engine parses source comments into a document keyed by
//! absolute file-system paths. This crate extends the engine's tag
//! vocabulary before extraction, rewrites every path-bearing field into a
//! stable root-relative identifier afterwards, and forwards only
//! actionable warnings to the caller's sink.

pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod tags;
pub mod types;

pub use crate::engine::{ExtractOptions, ExtractionEngine, Project};
pub use crate::error::Error;
pub use crate::normalize::{RootMatcher, normalize_document};
pub use crate::tags::{DigestTarget, ItemType, TagHandler, TagRegistry};
pub use crate::types::{
    ClassEntry, ClassItem, Document, FileEntry, ParamDescriptor, Warning,
};

/// Run extraction with the extended tag registry, normalize the returned
/// document in place, and forward actionable warnings to the project sink.
///
/// The document comes back with `files` and `classes` reindexed under
/// root-relative, extension-free keys; `classitems` and `warnings` keep
/// their order with their back-references rewritten to match.
///
/// # Errors
///
/// Propagates engine errors uncaught. Normalization and warning
/// forwarding themselves never fail.
pub fn extract_and_normalize(
    engine: &impl ExtractionEngine,
    input_paths: &[String],
    project: &impl Project,
) -> Result<Document, Error> {
    let mut registry = TagRegistry::new();
    registry.register_aliases();

    let options = ExtractOptions {
        paths: input_paths,
        project_name: project.name(),
        quiet: true,
        registry: &registry,
        write_json: false,
    };
    let mut document = engine.extract(&options)?;

    normalize_document(&mut document, input_paths);
    diagnostics::forward_actionable_warnings(&document, project);

    Ok(document)
}
