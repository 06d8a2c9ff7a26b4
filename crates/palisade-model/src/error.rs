//! Error types for the model layer.

/// Errors that can occur while decoding or resolving game objects.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The node's tag names an object kind no decoder is registered for.
    #[error("no decoder registered for object kind \"{0}\"")]
    UnknownKind(String),

    /// A required attribute is absent from the object node.
    #[error("\"{kind}\" node is missing required attribute \"{name}\"")]
    MissingAttribute {
        kind: &'static str,
        name: &'static str,
    },

    /// An attribute is present but its value cannot be parsed.
    #[error("attribute \"{name}\" has invalid value \"{value}\"")]
    InvalidAttribute { name: &'static str, value: String },
}
