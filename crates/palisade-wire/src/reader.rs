//! Pull-style reader over a wire tree.
//!
//! Message constructors that work from an incoming stream rather than
//! a pre-built tree use a [`NodeReader`]: a cursor positioned at one
//! node, handing out the node's attributes by name and its children
//! one at a time in document order. Concrete message types drive the
//! cursor themselves when they need typed, rather than generic, child
//! handling.

use crate::WireNode;

/// A cursor positioned at one node of a wire tree.
///
/// Borrows the tree; advancing the cursor never mutates it. Each call
/// to [`NodeReader::next_child`] yields a sub-reader positioned at the
/// next child, so nested structures are read by recursing into the
/// returned reader.
#[derive(Debug)]
pub struct NodeReader<'a> {
    node: &'a WireNode,
    next_child: usize,
}

impl<'a> NodeReader<'a> {
    /// Positions a reader at `node`.
    pub fn new(node: &'a WireNode) -> Self {
        Self { node, next_child: 0 }
    }

    /// Tag of the node under the cursor.
    pub fn tag(&self) -> &'a str {
        &self.node.tag
    }

    /// The node under the cursor, for callers that fall back to whole-
    /// tree handling after inspecting the tag.
    pub fn node(&self) -> &'a WireNode {
        self.node
    }

    /// Returns the value of one named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Reads the named attributes that are present on this node.
    ///
    /// Pairs come back in request order; names absent from the node
    /// are skipped rather than reported as errors, since callers name
    /// every attribute a message *may* carry.
    pub fn read_attributes(&self, names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .filter_map(|name| {
                self.node
                    .attribute(name)
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect()
    }

    /// Advances to the next child, returning a reader positioned at it.
    ///
    /// Children come back in document order. Returns `None` once all
    /// children have been read.
    pub fn next_child(&mut self) -> Option<NodeReader<'a>> {
        let child = self.node.children.get(self.next_child)?;
        self.next_child += 1;
        Some(NodeReader::new(child))
    }
}
