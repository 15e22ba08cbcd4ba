//! Error types for directive conversion.

/// Error parsing an output format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Name does not match any supported format.
    #[error("unknown output format: {0}")]
    Unknown(String),
}

/// Error during document conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// No directive is registered for a node and the policy forbids skipping.
    #[error("no directive registered for node '{name}'")]
    Unresolved {
        /// Directive name of the unresolved node.
        name: String,
    },
}
