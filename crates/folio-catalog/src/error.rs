//! Catalog configuration errors.

/// Error returned when a registry cannot be turned into a catalog.
///
/// All variants are startup-time configuration errors. The registry is
/// immutable input, so none of them can be recovered from at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Entry references a category outside the closed set.
    #[error("Unknown category '{category}' for entry '{entry}' (expected one of: {expected})")]
    UnknownCategory {
        /// Display text of the offending entry.
        entry: String,
        /// Category name as written in the registry.
        category: String,
        /// Comma-separated list of known categories.
        expected: String,
    },
    /// Two entries produce the same rewrite-rule source key.
    #[error("Rewrite rule collision on '{key}': entries '{first}' and '{second}'")]
    RewriteCollision {
        /// Source key shared by both entries.
        key: String,
        /// Display text of the entry registered first.
        first: String,
        /// Display text of the entry that would overwrite it.
        second: String,
    },
    /// Entry has an empty display text.
    #[error("Entry #{index} has an empty display text")]
    EmptyDisplayText {
        /// Zero-based position in the registry.
        index: usize,
    },
    /// URL segment cannot be used as a single path component.
    #[error("Entry '{entry}' has invalid URL segment '{segment}'")]
    InvalidSegment {
        /// Display text of the offending entry.
        entry: String,
        /// Segment that failed validation.
        segment: String,
    },
}
