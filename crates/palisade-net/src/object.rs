//! The object-carrying message: attributes plus embedded game objects.
//!
//! [`ObjectMessage`] composes the attribute capability with an ordered
//! list of domain-object handles, and defines the tree encoding that
//! merges type, attributes, and children into one wire node. It is
//! both usable directly (a generic envelope) and the building block
//! concrete message types wrap with their typed fields.

use palisade_model::{Game, ObjectRef};
use palisade_wire::{NodeReader, WireNode};

use crate::{AttributeMessage, Message, MessageError};

/// A protocol envelope with attributes and embedded game objects.
///
/// The child list holds handles into the shared object graph, in an
/// order that is significant and preserved exactly through a
/// construct → encode → decode → reconstruct cycle. The message owns
/// the *list*, never the objects: mutation of the referenced entities
/// stays with the domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMessage {
    base: AttributeMessage,
    objects: Vec<ObjectRef>,
}

impl ObjectMessage {
    /// Creates a message of the given type with no attributes and no
    /// children.
    pub fn new(message_type: impl Into<String>) -> Self {
        Self {
            base: AttributeMessage::new(message_type),
            objects: Vec::new(),
        }
    }

    /// Creates a message from alternating `name, value` strings.
    ///
    /// # Panics
    /// Panics if `pairs` has odd length, like
    /// [`AttributeMessage::with_attributes`].
    pub fn with_attributes(message_type: impl Into<String>, pairs: &[&str]) -> Self {
        Self {
            base: AttributeMessage::with_attributes(message_type, pairs),
            objects: Vec::new(),
        }
    }

    /// Reconstructs a message from a wire node.
    ///
    /// The node's tag becomes the message type; every child node is
    /// decoded through the game context in document order and appended
    /// to the child list.
    ///
    /// # Errors
    /// Any child that fails to decode fails the whole construction —
    /// there is no partial recovery, so a message either arrives
    /// complete or not at all.
    pub fn from_wire(game: &mut Game, node: &WireNode) -> Result<Self, MessageError> {
        let base = AttributeMessage::from_pairs(
            node.tag.as_str(),
            node.attributes
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        );
        let mut objects = Vec::with_capacity(node.children.len());
        for child in &node.children {
            objects.push(game.decode_object(child)?);
        }
        Ok(Self { base, objects })
    }

    /// Creates a message from a streaming reader, taking only the
    /// named attributes.
    ///
    /// The child list is left empty on purpose: a concrete type
    /// decoding from a stream drives the reader over its children
    /// itself, because it may need typed handling a generic walk
    /// cannot provide.
    pub fn from_reader(
        message_type: impl Into<String>,
        reader: &NodeReader<'_>,
        names: &[&str],
    ) -> Self {
        Self {
            base: AttributeMessage::from_pairs(
                message_type,
                reader.read_attributes(names),
            ),
            objects: Vec::new(),
        }
    }

    /// The message's type tag.
    pub fn message_type(&self) -> &str {
        self.base.message_type()
    }

    /// Returns the value of the named attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.base.attribute(name)
    }

    /// Sets an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.base.set_attribute(name, value);
    }

    /// Removes an attribute, returning its value if it was set.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.base.remove_attribute(name)
    }

    /// The embedded objects, in list order.
    pub fn children(&self) -> &[ObjectRef] {
        &self.objects
    }

    /// Appends one object to the child list.
    pub fn push_child(&mut self, object: ObjectRef) {
        self.objects.push(object);
    }

    /// Replaces the child list with `objects`.
    ///
    /// `None` leaves the current children untouched — it does NOT
    /// clear the list. Existing callers rely on an absent replacement
    /// being ignored, so the signature makes that case explicit.
    pub fn set_children(&mut self, objects: Option<Vec<ObjectRef>>) {
        if let Some(objects) = objects {
            self.objects = objects;
        }
    }

    /// Renders the message as a wire node: the type as the tag, the
    /// attributes in declared order, and each embedded object
    /// serialized by its own `to_wire` in list order.
    ///
    /// Pure: repeated calls on an unmodified message produce
    /// structurally equal nodes.
    pub fn to_wire(&self) -> WireNode {
        let mut node = self.base.to_wire();
        for object in &self.objects {
            node.push_child(object.to_wire());
        }
        node
    }
}

impl Message for ObjectMessage {
    fn message_type(&self) -> &str {
        ObjectMessage::message_type(self)
    }

    fn to_wire(&self) -> WireNode {
        ObjectMessage::to_wire(self)
    }
}

// =========================================================================
// Tests
// =========================================================================
