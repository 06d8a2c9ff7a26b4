//! The update message: the server's generic carrier for changed
//! game objects.
//!
//! After processing a turn the server pushes every object whose state
//! changed inside one `"update"` envelope; the client replaces its
//! copies with the embedded versions. The message is children-only —
//! all meaning lives in the carried objects.

use palisade_model::{Game, ObjectRef};
use palisade_wire::WireNode;

use crate::{Message, MessageError, ObjectMessage};

/// An `"update"` message carrying changed objects.
#[derive(Debug, Clone)]
pub struct UpdateMessage {
    inner: ObjectMessage,
}

impl UpdateMessage {
    /// The type tag.
    pub const TAG: &'static str = "update";

    /// Creates an update carrying the given objects, in order.
    pub fn new(objects: Vec<ObjectRef>) -> Self {
        let mut inner = ObjectMessage::new(Self::TAG);
        inner.set_children(Some(objects));
        Self { inner }
    }

    /// Reconstructs an update from a wire node via the generic path.
    ///
    /// # Errors
    /// Tag mismatch if the node is not an `"update"`; otherwise any
    /// child decode failure, propagated unchanged.
    pub fn from_wire(game: &mut Game, node: &WireNode) -> Result<Self, MessageError> {
        if node.tag != Self::TAG {
            return Err(MessageError::expected::<Self>(Self::TAG, node.tag.as_str()));
        }
        Ok(Self {
            inner: ObjectMessage::from_wire(game, node)?,
        })
    }

    /// The carried objects, in order.
    pub fn objects(&self) -> &[ObjectRef] {
        self.inner.children()
    }
}

impl Message for UpdateMessage {
    fn message_type(&self) -> &str {
        Self::TAG
    }

    fn to_wire(&self) -> WireNode {
        self.inner.to_wire()
    }
}
