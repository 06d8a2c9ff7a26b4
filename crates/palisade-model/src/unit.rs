//! Units: the moveable pieces on the map.

use palisade_wire::WireNode;

use crate::object::{parse, require};
use crate::{Game, GameObject, ModelError, ObjectId};

/// A single unit: who owns it, where it stands, how far it can still
/// move this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    id: ObjectId,
    owner: ObjectId,
    x: i32,
    y: i32,
    moves_left: u32,
}

impl Unit {
    /// The wire tag units serialize under.
    pub const KIND: &'static str = "unit";

    /// Creates a unit.
    pub fn new(
        id: impl Into<ObjectId>,
        owner: impl Into<ObjectId>,
        x: i32,
        y: i32,
        moves_left: u32,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            x,
            y,
            moves_left,
        }
    }

    /// The owning player's id.
    pub fn owner(&self) -> &ObjectId {
        &self.owner
    }

    /// Map position.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Movement points remaining this turn.
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Decodes a unit from its wire node.
    ///
    /// The context parameter is the reference-resolution hook shared
    /// by all object constructors; units carry no references beyond
    /// the owner id, which stays unresolved until someone asks for it.
    ///
    /// # Errors
    /// [`ModelError::MissingAttribute`] / [`ModelError::InvalidAttribute`]
    /// on a malformed node.
    pub fn from_wire(_game: &Game, node: &WireNode) -> Result<Self, ModelError> {
        let id = require(node, Self::KIND, "id")?;
        let owner = require(node, Self::KIND, "owner")?;
        let x = parse(node, Self::KIND, "x")?;
        let y = parse(node, Self::KIND, "y")?;
        let moves_left = parse(node, Self::KIND, "moves")?;
        Ok(Self::new(id, owner, x, y, moves_left))
    }
}

impl GameObject for Unit {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn to_wire(&self) -> WireNode {
        WireNode::new(Self::KIND)
            .with_attribute("id", self.id.as_str())
            .with_attribute("owner", self.owner.as_str())
            .with_attribute("x", self.x.to_string())
            .with_attribute("y", self.y.to_string())
            .with_attribute("moves", self.moves_left.to_string())
    }
}
