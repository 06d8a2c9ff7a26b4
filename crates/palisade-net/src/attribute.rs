//! The attribute capability: a typed envelope carrying ordered string
//! attributes and nothing else.
//!
//! [`AttributeMessage`] is one half of every protocol message — the
//! type tag plus the attribute set. The other half (embedded domain
//! objects) is layered on by [`ObjectMessage`](crate::ObjectMessage);
//! concrete message types compose the two capabilities with their own
//! typed-field logic.

use palisade_wire::{Attributes, WireNode};

/// A protocol envelope with a type tag and ordered string attributes.
///
/// The type is fixed at construction and never changes; attributes
/// may be read, set, and removed freely. Attribute declaration order
/// is the canonical serialization order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMessage {
    message_type: String,
    attributes: Attributes,
}

impl AttributeMessage {
    /// Creates a message of the given type with no attributes.
    pub fn new(message_type: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a message from alternating `name, value` strings.
    ///
    /// # Panics
    /// Panics if `pairs` has odd length. An unpaired name is a bug in
    /// the calling code, not a runtime condition to recover from.
    pub fn with_attributes(message_type: impl Into<String>, pairs: &[&str]) -> Self {
        assert!(
            pairs.len() % 2 == 0,
            "attribute list must alternate name/value, got {} items",
            pairs.len()
        );
        let mut message = Self::new(message_type);
        for pair in pairs.chunks_exact(2) {
            message.attributes.set(pair[0], pair[1]);
        }
        message
    }

    /// Creates a message from already-paired attributes, preserving
    /// their order. This is the entry point for the streaming path,
    /// where a reader hands back `(name, value)` pairs.
    pub fn from_pairs(
        message_type: impl Into<String>,
        pairs: Vec<(String, String)>,
    ) -> Self {
        let mut message = Self::new(message_type);
        for (name, value) in pairs {
            message.attributes.set(name, value);
        }
        message
    }

    /// The message's type tag.
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Returns the value of the named attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Sets an attribute. An existing name keeps its position in the
    /// serialization order.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    /// Removes an attribute, returning its value if it was set.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// The attribute set, in declaration order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Renders type and attributes as a childless wire node.
    pub fn to_wire(&self) -> WireNode {
        WireNode {
            tag: self.message_type.clone(),
            attributes: self.attributes.clone(),
            children: Vec::new(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
