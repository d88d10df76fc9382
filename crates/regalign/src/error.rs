//! Error types for alignment finders and states.

/// Errors surfaced by alignment finders and states.
///
/// Both kinds indicate static misconfiguration that representative-data tests
/// will surface; neither is retryable, and no transient failure modes exist
/// in this engine.
#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    /// The alignment configuration itself is invalid: an empty sequence, a
    /// trailer anywhere except the final position, or more than one trailer.
    #[error("invalid alignment configuration: {0}")]
    Configuration(String),

    /// Observed attribute data does not fit the configuration: an attribute
    /// survived past the catch-all trailer, or rendering was asked about a
    /// name the scan never saw.
    #[error("attribute data does not fit the configured alignment: {0}")]
    DataInconsistency(String),
}
