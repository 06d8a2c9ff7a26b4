//! The structured tree node that every Palisade message and domain
//! object serializes into.
//!
//! A [`WireNode`] is the interchange form of the protocol: a tag name,
//! an ordered set of string attributes, and an ordered list of child
//! nodes. Messages become nodes whose tag is the message type; domain
//! objects become child nodes produced by their own serializers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// An insertion-ordered string-to-string attribute set.
///
/// Declaration order is the canonical serialization order, so this is
/// backed by a `Vec` of pairs rather than a hash map — lookups are a
/// linear scan, which is fine for the handful of attributes a message
/// carries. Keys are unique: [`Attributes::set`] on an existing key
/// updates the value in place, keeping the key's original position.
///
/// `#[serde(transparent)]` serializes the set as a plain sequence of
/// `[name, value]` pairs. A JSON object would not guarantee key order
/// across parsers, and order must survive the byte round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `name` to `value`.
    ///
    /// An existing key keeps its position in the order; a new key is
    /// appended at the end.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Removes `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(n, _)| n == name)?;
        Some(self.0.remove(index).1)
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let mut attrs = Self::new();
        for (n, v) in pairs {
            attrs.set(n, v);
        }
        attrs
    }
}

// ---------------------------------------------------------------------------
// WireNode
// ---------------------------------------------------------------------------

/// One node of the structured wire tree.
///
/// Structural equality (`PartialEq`) covers the tag, the attributes in
/// order, and the children in order — two nodes are equal exactly when
/// they would produce the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNode {
    /// Tag name. For a message node this is the message type; for a
    /// domain object node it is the object kind.
    pub tag: String,

    /// Ordered string attributes.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,

    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WireNode>,
}

impl WireNode {
    /// Creates a node with the given tag, no attributes, no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute append.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Appends a child node.
    pub fn push_child(&mut self, child: WireNode) {
        self.children.push(child);
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The wire shape is a contract with every peer implementation, so
    //! these tests pin the exact serialized form as well as the
    //! ordering rules.

    use super::*;

    // =====================================================================
    // Attributes: ordering rules
    // =====================================================================

    #[test]
    fn test_attributes_preserve_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.set("turn", "5");
        attrs.set("player", "p1");
        attrs.set("season", "spring");

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            vec![("turn", "5"), ("player", "p1"), ("season", "spring")]
        );
    }

    #[test]
    fn test_attributes_set_existing_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.set("turn", "5");
        attrs.set("player", "p1");
        attrs.set("turn", "6");

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("turn", "6"), ("player", "p1")]);
    }

    #[test]
    fn test_attributes_remove_returns_value() {
        let mut attrs = Attributes::new();
        attrs.set("turn", "5");

        assert_eq!(attrs.remove("turn"), Some("5".to_string()));
        assert_eq!(attrs.remove("turn"), None);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_attributes_get_missing_is_none() {
        let attrs = Attributes::new();
        assert_eq!(attrs.get("anything"), None);
    }

    #[test]
    fn test_attributes_serialize_as_pair_sequence() {
        // `#[serde(transparent)]` over Vec<(String, String)> produces
        // [["turn","5"],["player","p1"]] — an ordered sequence, not an
        // object whose key order a parser may shuffle.
        let attrs: Attributes =
            [("turn", "5"), ("player", "p1")].into_iter().collect();
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"[["turn","5"],["player","p1"]]"#);
    }

    #[test]
    fn test_attributes_round_trip_preserves_order() {
        let attrs: Attributes =
            [("c", "3"), ("a", "1"), ("b", "2")].into_iter().collect();
        let bytes = serde_json::to_vec(&attrs).unwrap();
        let decoded: Attributes = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(attrs, decoded);
    }

    // =====================================================================
    // WireNode
    // =====================================================================

    #[test]
    fn test_new_node_is_empty() {
        let node = WireNode::new("update");
        assert_eq!(node.tag, "update");
        assert!(node.attributes.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_node_structural_equality() {
        let a = WireNode::new("move").with_attribute("unit", "unit:1");
        let b = WireNode::new("move").with_attribute("unit", "unit:1");
        assert_eq!(a, b);

        // Attribute order is part of the structure.
        let c = WireNode::new("move")
            .with_attribute("unit", "unit:1")
            .with_attribute("direction", "ne");
        let d = WireNode::new("move")
            .with_attribute("direction", "ne")
            .with_attribute("unit", "unit:1");
        assert_ne!(c, d);
    }

    #[test]
    fn test_child_order_is_part_of_the_structure() {
        let mut a = WireNode::new("update");
        a.push_child(WireNode::new("unit"));
        a.push_child(WireNode::new("player"));

        let mut b = WireNode::new("update");
        b.push_child(WireNode::new("player"));
        b.push_child(WireNode::new("unit"));

        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_fields_are_omitted_from_json() {
        let node = WireNode::new("update");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"tag":"update"}"#);
    }

    #[test]
    fn test_node_round_trip_with_nested_children() {
        let mut node = WireNode::new("update").with_attribute("turn", "5");
        let mut child = WireNode::new("unit").with_attribute("id", "unit:1");
        child.push_child(WireNode::new("cargo"));
        node.push_child(child);

        let bytes = serde_json::to_vec(&node).unwrap();
        let decoded: WireNode = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(node, decoded);
    }

    #[test]
    fn test_node_deserializes_without_optional_fields() {
        // A peer may omit attributes/children entirely; `#[serde(default)]`
        // fills them in as empty.
        let node: WireNode = serde_json::from_str(r#"{"tag":"end-turn"}"#).unwrap();
        assert_eq!(node.tag, "end-turn");
        assert!(node.attributes.is_empty());
        assert!(node.children.is_empty());
    }
}
