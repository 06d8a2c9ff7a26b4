//! Integration tests for the full message cycle: construct → wire
//! tree → bytes → wire tree → reconstruct, with real domain objects
//! and the standard registries on both ends.

use palisade_model::{Game, ObjectId, ObjectRef, Player, Unit};
use palisade_net::{
    Direction, Message, MessageError, MessageRegistry, MoveMessage, ObjectMessage,
    UpdateMessage,
};
use palisade_wire::{JsonWireCodec, WireCodec, WireNode};

fn sender_objects() -> Vec<ObjectRef> {
    vec![
        ObjectRef::new(Player::new("player:1", "Willem", "dutch")),
        ObjectRef::new(Unit::new("unit:1", "player:1", 4, 5, 2)),
        ObjectRef::new(Unit::new("unit:2", "player:1", 9, 9, 0)),
    ]
}

#[test]
fn update_survives_the_byte_round_trip() {
    let codec = JsonWireCodec;
    let mut receiver = Game::with_standard_decoders();
    let registry = MessageRegistry::with_standard_messages();

    let sent = UpdateMessage::new(sender_objects());
    let bytes = codec.encode(&sent.to_wire()).unwrap();

    let node = codec.decode(&bytes).unwrap();
    let received = registry.decode(&mut receiver, &node).unwrap();

    assert_eq!(received.message_type(), "update");
    // A lossless round trip reproduces the sent tree exactly.
    assert_eq!(received.to_wire(), sent.to_wire());

    // The receiver's graph now resolves every carried object.
    for object in sender_objects() {
        assert!(receiver.lookup(object.id()).is_some());
    }
}

#[test]
fn move_order_survives_the_byte_round_trip() {
    let codec = JsonWireCodec;
    let mut receiver = Game::with_standard_decoders();

    let sent = MoveMessage::new("unit:1", Direction::SouthWest);
    let bytes = codec.encode(&sent.to_wire()).unwrap();

    let node = codec.decode(&bytes).unwrap();
    let received = MoveMessage::from_wire(&mut receiver, &node).unwrap();

    assert_eq!(received.unit(), &ObjectId::new("unit:1"));
    assert_eq!(received.direction(), Direction::SouthWest);
}

#[test]
fn generic_envelope_round_trip_preserves_everything() {
    let codec = JsonWireCodec;
    let mut receiver = Game::with_standard_decoders();

    let mut sent = ObjectMessage::with_attributes(
        "update",
        &["turn", "12", "season", "autumn"],
    );
    sent.set_children(Some(sender_objects()));

    let bytes = codec.encode(&sent.to_wire()).unwrap();
    let node = codec.decode(&bytes).unwrap();
    let received = ObjectMessage::from_wire(&mut receiver, &node).unwrap();

    // Type, attribute order, child identity and order all preserved.
    assert_eq!(received.message_type(), "update");
    let pairs: Vec<_> = node.attributes.iter().collect();
    assert_eq!(pairs, vec![("turn", "12"), ("season", "autumn")]);
    let ids: Vec<_> = received
        .children()
        .iter()
        .map(|o| o.id().to_string())
        .collect();
    assert_eq!(ids, vec!["player:1", "unit:1", "unit:2"]);

    // And re-encoding the reconstruction is the identity.
    assert_eq!(received.to_wire(), sent.to_wire());
}

#[test]
fn serialization_is_stable_across_calls() {
    let mut message = ObjectMessage::with_attributes("update", &["turn", "3"]);
    message.push_child(ObjectRef::new(Unit::new("unit:1", "player:1", 1, 1, 1)));

    let first = message.to_wire();
    let second = message.to_wire();
    assert_eq!(first, second);

    let codec = JsonWireCodec;
    assert_eq!(
        codec.encode(&first).unwrap(),
        codec.encode(&second).unwrap()
    );
}

#[test]
fn one_bad_child_rejects_the_whole_message() {
    let mut receiver = Game::with_standard_decoders();
    let registry = MessageRegistry::with_standard_messages();

    let mut node = WireNode::new("update");
    node.push_child(ObjectRef::new(Unit::new("unit:1", "player:1", 0, 0, 1)).to_wire());
    // Well-formed tree, but the unit node is semantically broken.
    node.push_child(WireNode::new("unit").with_attribute("id", "unit:2"));

    // The broken child poisons the whole decode; the caller never
    // receives a partially-populated message.
    let result = registry.decode(&mut receiver, &node);
    assert!(matches!(result, Err(MessageError::Model(_))));
}

#[test]
fn wire_shape_matches_the_documented_form() {
    // Peers implement against this exact JSON shape.
    let message = ObjectMessage::with_attributes("update", &["turn", "5"]);
    let bytes = JsonWireCodec.encode(&message.to_wire()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "tag": "update",
            "attributes": [["turn", "5"]],
        })
    );
}
