//! Codec trait and implementations for the byte form of a wire tree.
//!
//! The tree is the canonical form; how a tree becomes bytes on a
//! connection is a pluggable concern behind the [`WireCodec`] trait.
//! [`JsonWireCodec`] is the default implementation. A compact binary
//! codec can be added later without touching message code.

use crate::{WireError, WireNode};

/// Encodes wire trees to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` so a codec can be shared with whatever
/// connection tasks the transport layer runs.
pub trait WireCodec: Send + Sync + 'static {
    /// Serializes a node tree into bytes.
    ///
    /// # Errors
    /// Returns [`WireError::Encode`] if serialization fails.
    fn encode(&self, node: &WireNode) -> Result<Vec<u8>, WireError>;

    /// Deserializes bytes back into a node tree.
    ///
    /// # Errors
    /// Returns [`WireError::Decode`] if the bytes are malformed, or
    /// [`WireError::InvalidNode`] if they parse but carry an empty tag.
    fn decode(&self, data: &[u8]) -> Result<WireNode, WireError>;
}

// ---------------------------------------------------------------------------
// JsonWireCodec
// ---------------------------------------------------------------------------

/// A [`WireCodec`] that renders the tree as JSON (via `serde_json`).
///
/// Human-readable, so captured traffic can be inspected directly.
/// Behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use palisade_wire::{JsonWireCodec, WireCodec, WireNode};
///
/// let codec = JsonWireCodec;
/// let node = WireNode::new("update").with_attribute("turn", "5");
///
/// let bytes = codec.encode(&node).unwrap();
/// let decoded = codec.decode(&bytes).unwrap();
/// assert_eq!(node, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWireCodec;

#[cfg(feature = "json")]
impl WireCodec for JsonWireCodec {
    fn encode(&self, node: &WireNode) -> Result<Vec<u8>, WireError> {
        serde_json::to_vec(node).map_err(WireError::Encode)
    }

    fn decode(&self, data: &[u8]) -> Result<WireNode, WireError> {
        let node: WireNode =
            serde_json::from_slice(data).map_err(WireError::Decode)?;
        if node.tag.is_empty() {
            return Err(WireError::InvalidNode(
                "decoded node has an empty tag".into(),
            ));
        }
        Ok(node)
    }
}
