//! The game context: the object graph plus the decode dispatch table.
//!
//! During decode, a message hands each child node to its [`Game`],
//! which picks the right constructor by node tag and interns the
//! result so later references to the same identity resolve to the
//! freshest state.
//!
//! # Concurrency note
//!
//! `Game` is NOT thread-safe by itself — it uses plain `HashMap`s.
//! One logical flow (one decode call, one encode call) owns the
//! context for the duration of the operation; the surrounding layer
//! is responsible for not sharing it across threads while mutating.

use std::collections::HashMap;

use palisade_wire::WireNode;

use crate::{ModelError, ObjectId, ObjectRef, Player, Unit};

/// A decode constructor for one object kind.
///
/// Takes the context (for resolving references to other objects) and
/// the node to decode; returns a handle to the decoded object.
pub type ObjectDecodeFn = fn(&Game, &WireNode) -> Result<ObjectRef, ModelError>;

/// The object graph and decoder registry for one game session.
///
/// Two maps, kept independent on purpose:
/// - `objects` — every known object, keyed by identity. This is the
///   shared graph that message child lists hold handles into.
/// - `decoders` — node tag → decode constructor. The set of object
///   kinds is open; new kinds register a constructor instead of
///   extending a match somewhere.
pub struct Game {
    objects: HashMap<ObjectId, ObjectRef>,
    decoders: HashMap<&'static str, ObjectDecodeFn>,
}

impl Game {
    /// Creates an empty context with no decoders registered.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            decoders: HashMap::new(),
        }
    }

    /// Creates a context with the standard object kinds registered.
    pub fn with_standard_decoders() -> Self {
        let mut game = Self::new();
        game.register_decoder(Unit::KIND, |g, n| {
            Ok(ObjectRef::new(Unit::from_wire(g, n)?))
        });
        game.register_decoder(Player::KIND, |g, n| {
            Ok(ObjectRef::new(Player::from_wire(g, n)?))
        });
        game
    }

    /// Registers a decode constructor for an object kind.
    ///
    /// Registering the same kind again replaces the previous
    /// constructor.
    pub fn register_decoder(&mut self, kind: &'static str, decode: ObjectDecodeFn) {
        self.decoders.insert(kind, decode);
    }

    /// Interns an object into the graph, returning its handle.
    ///
    /// An object with the same identity is replaced — the graph always
    /// holds the freshest known state for each id.
    pub fn register(&mut self, object: ObjectRef) -> ObjectRef {
        tracing::debug!(id = %object.id(), kind = object.kind(), "object registered");
        self.objects.insert(object.id().clone(), object.clone());
        object
    }

    /// Looks up an object by identity.
    pub fn lookup(&self, id: &ObjectId) -> Option<ObjectRef> {
        self.objects.get(id).cloned()
    }

    /// Decodes one wire node into a game object and interns it.
    ///
    /// Dispatches on the node's tag through the decoder registry.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownKind`] if no decoder is registered
    /// for the tag, or whatever the kind's constructor reports for a
    /// malformed node.
    pub fn decode_object(&mut self, node: &WireNode) -> Result<ObjectRef, ModelError> {
        let Some(decode) = self.decoders.get(node.tag.as_str()).copied() else {
            tracing::warn!(tag = %node.tag, "no decoder for object kind");
            return Err(ModelError::UnknownKind(node.tag.clone()));
        };

        let object = match decode(self, node) {
            Ok(object) => object,
            Err(error) => {
                tracing::warn!(tag = %node.tag, error = %error, "object decode failed");
                return Err(error);
            }
        };
        tracing::debug!(id = %object.id(), kind = object.kind(), "object decoded");
        Ok(self.register(object))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
