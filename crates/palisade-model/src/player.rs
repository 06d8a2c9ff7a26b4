//! Players: the participants in a game.

use palisade_wire::WireNode;

use crate::object::require;
use crate::{Game, GameObject, ModelError, ObjectId};

/// One participant: display name plus the nation they play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: ObjectId,
    name: String,
    nation: String,
}

impl Player {
    /// The wire tag players serialize under.
    pub const KIND: &'static str = "player";

    /// Creates a player.
    pub fn new(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        nation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nation: nation.into(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nation this player controls.
    pub fn nation(&self) -> &str {
        &self.nation
    }

    /// Decodes a player from its wire node.
    pub fn from_wire(_game: &Game, node: &WireNode) -> Result<Self, ModelError> {
        let id = require(node, Self::KIND, "id")?;
        let name = require(node, Self::KIND, "name")?;
        let nation = require(node, Self::KIND, "nation")?;
        Ok(Self::new(id, name, nation))
    }
}

impl GameObject for Player {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn to_wire(&self) -> WireNode {
        WireNode::new(Self::KIND)
            .with_attribute("id", self.id.as_str())
            .with_attribute("name", self.name.as_str())
            .with_attribute("nation", self.nation.as_str())
    }
}
