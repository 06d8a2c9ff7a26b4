//! Error types for the message layer.

use palisade_model::ModelError;
use palisade_wire::WireError;

/// Errors that can occur while constructing or decoding messages.
///
/// This layer never suppresses a collaborator's error — model and
/// wire failures pass through unchanged (`#[from]`); the only context
/// added here is the concrete type name at the tag-mismatch site.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// A streaming decode observed a nested tag it did not expect.
    ///
    /// Terminal for the decode attempt: the token stream is
    /// desynchronized and the connection-level caller decides whether
    /// to resynchronize or drop.
    #[error("in {message_type}, expected \"{wanted}\" but read \"{got}\"")]
    UnexpectedTag {
        /// Name of the concrete message type that was decoding.
        message_type: &'static str,
        /// The tag the decoder wanted to read.
        wanted: String,
        /// The tag actually observed.
        got: String,
    },

    /// The node's tag names a message type no decoder is registered for.
    #[error("no decoder registered for message type \"{0}\"")]
    UnknownType(String),

    /// A typed field's backing attribute is absent.
    #[error("message is missing required attribute \"{0}\"")]
    MissingAttribute(&'static str),

    /// A typed field's backing attribute cannot be parsed.
    #[error("message attribute \"{name}\" has invalid value \"{value}\"")]
    InvalidAttribute { name: &'static str, value: String },

    /// An embedded object failed to decode.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The byte form could not be encoded or decoded.
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl MessageError {
    /// Builds the tag-mismatch diagnostic for message type `M`.
    ///
    /// Used by concrete types while decoding a stream: when the next
    /// nested tag is not the one the type's schema calls for, decode
    /// stops with this error. It carries the concrete type's name and
    /// both tags, and is never handled below the connection layer.
    pub fn expected<M: 'static>(
        wanted: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Self::UnexpectedTag {
            message_type: std::any::type_name::<M>(),
            wanted: wanted.into(),
            got: got.into(),
        }
    }
}
