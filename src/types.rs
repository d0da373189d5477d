/// Core domain types for the extracted documentation metadata.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A class descriptor. Keyed in [`Document::classes`] by its identifier,
/// which starts out as an absolute, file-qualified string and ends up
/// root-relative after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Every field this crate does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    /// Back-reference to the file the class was declared in.
    #[serde(default)]
    pub file: String,
    /// Display name of the class.
    #[serde(default)]
    pub name: String,
    /// Short display name of the class.
    #[serde(default)]
    pub shortname: String,
}

/// A single documented member (property, method, ...) with back-references
/// to its owning file and class. Not uniquely keyed — order matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassItem {
    /// Identifier of the owning class.
    #[serde(default)]
    pub class: String,
    /// Every field this crate does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    /// Path of the file the member was documented in.
    #[serde(default)]
    pub file: String,
}

/// The full output of one extraction run. Mutated in place by the
/// normalizer: `files` and `classes` are reindexed under normalized keys,
/// `classitems` and `warnings` keep their order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Class identifier -> class descriptor.
    #[serde(default)]
    pub classes: HashMap<String, ClassEntry>,
    /// Documented members, in extraction order.
    #[serde(default)]
    pub classitems: Vec<ClassItem>,
    /// File path -> file descriptor.
    #[serde(default)]
    pub files: HashMap<String, FileEntry>,
    /// Warnings raised during extraction, in extraction order.
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl Document {
    /// Decode a document from an engine's raw JSON output.
    ///
    /// # Errors
    ///
    /// Returns `Error::DocumentDecode` if the value does not have the
    /// expected collection shape.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, Error> {
        return Ok(serde_json::from_value(value)?);
    }
}

/// A file descriptor. Keyed in [`Document::files`] by its path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Every field this crate does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    /// Display name of the file — rewritten to the normalized key.
    #[serde(default)]
    pub name: String,
}

/// One parsed parameter-shaped descriptor, as produced by the param digest
/// and accumulated onto `yields` by the yield digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Free-text description following the name.
    #[serde(default)]
    pub description: String,
    /// Parameter name token.
    pub name: String,
    /// Braced type annotation, when present.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
}

/// A non-fatal message raised during extraction.
/// `line` is an error-location string, commonly `path:lineNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Location the warning points at.
    #[serde(default)]
    pub line: String,
    /// Human-readable warning text.
    pub message: String,
}
