/// Crate-level error types for docnorm.
///
/// Normalization and tag registration never fail; every variant here comes
/// from the boundary with the extraction engine.
#[allow(clippy::error_impl_error, reason = "crate-internal error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An engine's raw JSON output does not decode into a document.
    #[error("document decode: {0}")]
    DocumentDecode(
        /// The wrapped deserialization error.
        #[from]
        serde_json::Error,
    ),

    /// The extraction engine reported a failure before producing a document.
    #[error("extraction failed: {reason}")]
    Extraction {
        /// Engine-reported description of the failure.
        reason: String,
    },
}
