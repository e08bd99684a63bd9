//! Error types for the rendering core

/// Main error type for rendering-core operations
///
/// Almost every malformed shape in a federated document degrades to a safe
/// default instead of erroring; the variants here cover the few cases where
/// the caller's contract is actually violated and worth surfacing.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A mapping was missing a field the caller depends on
    /// (e.g. a link object without `href`)
    #[error("missing field `{field}` in {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for rendering-core operations
pub type Result<T> = std::result::Result<T, RenderError>;
