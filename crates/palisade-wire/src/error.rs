//! Error types for the wire layer.

/// Errors that can occur while moving a wire tree to or from bytes.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Serialization failed (turning a node tree into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (the bytes are not a well-formed tree).
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The bytes parsed, but the resulting node violates a structural
    /// rule (e.g. an empty tag).
    #[error("invalid node: {0}")]
    InvalidNode(String),
}
