//! Object identity and the trait every game entity implements.
//!
//! A game object is anything that can ride inside a protocol message:
//! units, players, tiles, settlements. Each one has a stable string
//! identity, a wire kind (its node tag), and its own serializer. The
//! message layer never looks inside an object — it holds handles and
//! delegates.

use std::fmt;
use std::sync::Arc;

use palisade_wire::WireNode;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ObjectId
// ---------------------------------------------------------------------------

/// A stable identifier for a game object, e.g. `"unit:17"`.
///
/// Identifiers are assigned by the server when an object enters the
/// game and never change afterwards; clients refer to objects only by
/// id. `#[serde(transparent)]` keeps the wire form a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// GameObject
// ---------------------------------------------------------------------------

/// The trait every embeddable game entity implements.
///
/// `to_wire` is the object's own serialization contract: the message
/// layer calls it once per child when rendering a message tree, and
/// never edits the produced node.
pub trait GameObject: fmt::Debug + Send + Sync {
    /// The object's stable identity.
    fn id(&self) -> &ObjectId;

    /// The node tag this object serializes under (e.g. `"unit"`).
    fn kind(&self) -> &'static str;

    /// Renders the object as a wire node.
    fn to_wire(&self) -> WireNode;
}

// ---------------------------------------------------------------------------
// ObjectRef
// ---------------------------------------------------------------------------

/// A shared handle to a game object.
///
/// The game graph owns its objects; messages and other holders keep
/// `ObjectRef` handles into it. A handle grants lookup and read
/// access, not exclusive access — mutation discipline stays with the
/// domain model. Under the hood this is an `Arc<dyn GameObject>`, a
/// shared trait object: holders work against the trait and never
/// learn the concrete entity type, and cloning is cheap (one `Arc`
/// bump).
///
/// Two handles are equal when they name the same object identity.
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn GameObject>);

impl ObjectRef {
    /// Wraps a concrete object in a shared handle.
    pub fn new(object: impl GameObject + 'static) -> Self {
        Self(Arc::new(object))
    }

    /// The referenced object's identity.
    pub fn id(&self) -> &ObjectId {
        self.0.id()
    }

    /// The referenced object's wire kind.
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    /// Renders the referenced object as a wire node.
    pub fn to_wire(&self) -> WireNode {
        self.0.to_wire()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ObjectRef {}

// ---------------------------------------------------------------------------
// Attribute plumbing shared by the concrete object decoders
// ---------------------------------------------------------------------------

/// Fetches a required attribute from an object node.
pub(crate) fn require<'a>(
    node: &'a WireNode,
    kind: &'static str,
    name: &'static str,
) -> Result<&'a str, crate::ModelError> {
    node.attribute(name)
        .ok_or(crate::ModelError::MissingAttribute { kind, name })
}

/// Fetches and parses a required attribute, reporting the offending
/// value on failure.
pub(crate) fn parse<T: std::str::FromStr>(
    node: &WireNode,
    kind: &'static str,
    name: &'static str,
) -> Result<T, crate::ModelError> {
    let value = require(node, kind, name)?;
    value
        .parse()
        .map_err(|_| crate::ModelError::InvalidAttribute {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker(ObjectId);

    impl GameObject for Marker {
        fn id(&self) -> &ObjectId {
            &self.0
        }

        fn kind(&self) -> &'static str {
            "marker"
        }

        fn to_wire(&self) -> WireNode {
            WireNode::new("marker").with_attribute("id", self.0.as_str())
        }
    }

    #[test]
    fn test_object_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ObjectId::new("unit:17")).unwrap();
        assert_eq!(json, "\"unit:17\"");
    }

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId::new("unit:17").to_string(), "unit:17");
    }

    #[test]
    fn test_refs_compare_by_identity() {
        let a = ObjectRef::new(Marker(ObjectId::new("m:1")));
        let b = ObjectRef::new(Marker(ObjectId::new("m:1")));
        let c = ObjectRef::new(Marker(ObjectId::new("m:2")));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ref_delegates_serialization() {
        let handle = ObjectRef::new(Marker(ObjectId::new("m:1")));
        let node = handle.to_wire();
        assert_eq!(node.tag, "marker");
        assert_eq!(node.attribute("id"), Some("m:1"));
    }
}
