//! The message trait and the type-tag dispatch registry.
//!
//! The set of concrete message types is open: any number of them can
//! exist, each knowing how to decode itself from a wire node. The
//! registry maps type tags to decode constructors so an incoming node
//! can be dispatched without a closed match over every known type.

use std::collections::HashMap;

use palisade_model::Game;
use palisade_wire::WireNode;

use crate::{MessageError, MoveMessage, UpdateMessage};

/// Behavior every protocol message shares: a type tag and a wire form.
///
/// Concrete types implement this over the attribute and child-list
/// capabilities plus their own typed fields.
pub trait Message: std::fmt::Debug + Send {
    /// The message's type tag (e.g. `"update"`).
    fn message_type(&self) -> &str;

    /// Renders the message as a wire node.
    fn to_wire(&self) -> WireNode;
}

/// A decode constructor for one message type.
pub type MessageDecodeFn =
    fn(&mut Game, &WireNode) -> Result<Box<dyn Message>, MessageError>;

/// Maps type tags to decode constructors.
///
/// Same open-set pattern as the object decoders in the model: a new
/// message type registers a constructor instead of extending a
/// central match.
pub struct MessageRegistry {
    decoders: HashMap<&'static str, MessageDecodeFn>,
}

impl MessageRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Creates a registry with the standard message types registered.
    pub fn with_standard_messages() -> Self {
        let mut registry = Self::new();
        registry.register(UpdateMessage::TAG, |game, node| {
            Ok(Box::new(UpdateMessage::from_wire(game, node)?))
        });
        registry.register(MoveMessage::TAG, |game, node| {
            Ok(Box::new(MoveMessage::from_wire(game, node)?))
        });
        registry
    }

    /// Registers a decode constructor for a message type.
    ///
    /// Registering the same tag again replaces the previous
    /// constructor.
    pub fn register(&mut self, tag: &'static str, decode: MessageDecodeFn) {
        self.decoders.insert(tag, decode);
    }

    /// Decodes one wire node into a message, dispatching on its tag.
    ///
    /// # Errors
    /// Returns [`MessageError::UnknownType`] if no constructor is
    /// registered for the tag; otherwise whatever the constructor
    /// reports.
    pub fn decode(
        &self,
        game: &mut Game,
        node: &WireNode,
    ) -> Result<Box<dyn Message>, MessageError> {
        let Some(decode) = self.decoders.get(node.tag.as_str()).copied() else {
            tracing::warn!(tag = %node.tag, "no decoder for message type");
            return Err(MessageError::UnknownType(node.tag.clone()));
        };

        let message = match decode(game, node) {
            Ok(message) => message,
            Err(error) => {
                tracing::warn!(tag = %node.tag, error = %error, "message decode failed");
                return Err(error);
            }
        };
        tracing::debug!(
            message_type = message.message_type(),
            children = node.children.len(),
            "message decoded"
        );
        Ok(message)
    }
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
