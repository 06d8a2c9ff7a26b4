//! The move message: a client order to move one unit.
//!
//! `"move"` layers typed fields (unit id, direction) over the
//! attribute capability and reads its children by hand: the server's
//! echo form embeds the moved unit's refreshed state as a nested
//! `unit` node, and the decoder refuses any other nested tag.

use palisade_model::{Game, ObjectId, ObjectRef, Unit};
use palisade_wire::{NodeReader, WireNode};

use crate::{Message, MessageError, ObjectMessage};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight map directions a unit can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The wire spelling of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
        }
    }

    /// Parses the wire spelling.
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "n" => Self::North,
            "ne" => Self::NorthEast,
            "e" => Self::East,
            "se" => Self::SouthEast,
            "s" => Self::South,
            "sw" => Self::SouthWest,
            "w" => Self::West,
            "nw" => Self::NorthWest,
            _ => return None,
        })
    }

    /// The map offset one step in this direction covers.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// MoveMessage
// ---------------------------------------------------------------------------

/// A `"move"` message: which unit moves, and where.
///
/// The client form is attributes-only. The server's echo may embed
/// the moved unit's refreshed state as a child, which is the only
/// nested tag the decoder accepts.
#[derive(Debug, Clone)]
pub struct MoveMessage {
    base: ObjectMessage,
    unit: ObjectId,
    direction: Direction,
}

impl MoveMessage {
    /// The type tag.
    pub const TAG: &'static str = "move";

    /// Creates a move order for a unit.
    pub fn new(unit: impl Into<ObjectId>, direction: Direction) -> Self {
        let unit = unit.into();
        let base = ObjectMessage::with_attributes(
            Self::TAG,
            &["unit", unit.as_str(), "direction", direction.as_str()],
        );
        Self {
            base,
            unit,
            direction,
        }
    }

    /// Attaches the moved unit's refreshed state for the echo form.
    pub fn with_unit_state(mut self, unit: ObjectRef) -> Self {
        self.base.set_children(Some(vec![unit]));
        self
    }

    /// Reconstructs a move from a wire node.
    pub fn from_wire(game: &mut Game, node: &WireNode) -> Result<Self, MessageError> {
        if node.tag != Self::TAG {
            return Err(MessageError::expected::<Self>(Self::TAG, node.tag.as_str()));
        }
        let mut reader = NodeReader::new(node);
        Self::from_reader(game, &mut reader)
    }

    /// Reconstructs a move from a streaming reader.
    ///
    /// Reads the two named attributes into the base, then drives the
    /// reader over the children itself: every nested node must be a
    /// `unit`, anything else means the stream is desynchronized.
    ///
    /// # Errors
    /// [`MessageError::MissingAttribute`] / [`MessageError::InvalidAttribute`]
    /// for the typed fields, [`MessageError::UnexpectedTag`] on a
    /// foreign nested tag, and any unit decode failure unchanged.
    pub fn from_reader(
        game: &mut Game,
        reader: &mut NodeReader<'_>,
    ) -> Result<Self, MessageError> {
        let mut base =
            ObjectMessage::from_reader(Self::TAG, reader, &["unit", "direction"]);

        let unit = base
            .attribute("unit")
            .map(ObjectId::from)
            .ok_or(MessageError::MissingAttribute("unit"))?;
        let raw = base
            .attribute("direction")
            .ok_or(MessageError::MissingAttribute("direction"))?;
        let direction = Direction::from_wire(raw).ok_or_else(|| {
            MessageError::InvalidAttribute {
                name: "direction",
                value: raw.to_string(),
            }
        })?;

        let mut carried = Vec::new();
        while let Some(child) = reader.next_child() {
            if child.tag() != Unit::KIND {
                return Err(MessageError::expected::<Self>(Unit::KIND, child.tag()));
            }
            carried.push(game.decode_object(child.node())?);
        }
        base.set_children(Some(carried));

        Ok(Self {
            base,
            unit,
            direction,
        })
    }

    /// The id of the unit being moved.
    pub fn unit(&self) -> &ObjectId {
        &self.unit
    }

    /// The direction of the move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The moved unit's refreshed state, if this is an echo form.
    pub fn unit_state(&self) -> Option<&ObjectRef> {
        self.base.children().first()
    }
}

impl Message for MoveMessage {
    fn message_type(&self) -> &str {
        Self::TAG
    }

    fn to_wire(&self) -> WireNode {
        self.base.to_wire()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_form_round_trip() {
        let mut game = Game::with_standard_decoders();
        let order = MoveMessage::new("unit:7", Direction::NorthEast);

        let node = order.to_wire();
        assert_eq!(node.attribute("unit"), Some("unit:7"));
        assert_eq!(node.attribute("direction"), Some("ne"));

        let decoded = MoveMessage::from_wire(&mut game, &node).unwrap();
        assert_eq!(decoded.unit(), &ObjectId::new("unit:7"));
        assert_eq!(decoded.direction(), Direction::NorthEast);
        assert!(decoded.unit_state().is_none());
    }

    #[test]
    fn test_echo_form_carries_unit_state() {
        let mut game = Game::with_standard_decoders();
        let echo = MoveMessage::new("unit:7", Direction::East).with_unit_state(
            ObjectRef::new(Unit::new("unit:7", "player:1", 5, 4, 2)),
        );

        let decoded = MoveMessage::from_wire(&mut game, &echo.to_wire()).unwrap();
        let state = decoded.unit_state().unwrap();
        assert_eq!(state.id(), &ObjectId::new("unit:7"));
        assert_eq!(state.to_wire().attribute("x"), Some("5"));
    }

    #[test]
    fn test_foreign_nested_tag_desynchronizes() {
        let mut game = Game::with_standard_decoders();
        let mut node = MoveMessage::new("unit:7", Direction::East).to_wire();
        node.push_child(WireNode::new("attack"));

        let result = MoveMessage::from_wire(&mut game, &node);
        match result {
            Err(MessageError::UnexpectedTag {
                message_type,
                wanted,
                got,
            }) => {
                assert!(message_type.contains("MoveMessage"));
                assert_eq!(wanted, "unit");
                assert_eq!(got, "attack");
            }
            other => panic!("expected UnexpectedTag, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_direction_is_reported() {
        let mut game = Game::new();
        let node = WireNode::new("move").with_attribute("unit", "unit:7");

        let result = MoveMessage::from_wire(&mut game, &node);
        assert!(matches!(
            result,
            Err(MessageError::MissingAttribute("direction"))
        ));
    }

    #[test]
    fn test_invalid_direction_is_reported() {
        let mut game = Game::new();
        let node = WireNode::new("move")
            .with_attribute("unit", "unit:7")
            .with_attribute("direction", "up");

        let result = MoveMessage::from_wire(&mut game, &node);
        assert!(matches!(
            result,
            Err(MessageError::InvalidAttribute { name: "direction", value }) if value == "up"
        ));
    }

    #[test]
    fn test_direction_spellings_round_trip() {
        for direction in [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ] {
            assert_eq!(Direction::from_wire(direction.as_str()), Some(direction));
        }
        assert_eq!(Direction::from_wire("up"), None);
    }
}
