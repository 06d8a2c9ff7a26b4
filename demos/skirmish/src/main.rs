//! One simulated exchange between a client and a server, end to end:
//! a move order goes out as bytes, the server applies it, and the
//! resulting update round-trips back into the client's object graph.
//!
//! Run with `RUST_LOG=debug` to watch the registries work.

use palisade_model::{Game, ObjectId, ObjectRef, Player, Unit};
use palisade_net::{
    Direction, Message, MessageError, MessageRegistry, MoveMessage, UpdateMessage,
};
use palisade_wire::{JsonWireCodec, WireCodec};

fn main() -> Result<(), MessageError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let codec = JsonWireCodec;

    // Both ends of the wire, each with its own object graph.
    let mut server = Game::with_standard_decoders();
    let mut client = Game::with_standard_decoders();
    let registry = MessageRegistry::with_standard_messages();

    let willem = ObjectRef::new(Player::new("player:1", "Willem", "dutch"));
    let scout = ObjectRef::new(Unit::new("unit:1", "player:1", 4, 5, 2));
    server.register(willem.clone());
    server.register(scout.clone());
    client.register(willem);
    client.register(scout);

    // --- Client: order the scout one step east ---
    let order = MoveMessage::new("unit:1", Direction::East);
    let request = codec.encode(&order.to_wire())?;
    tracing::info!(bytes = request.len(), "client sent move order");

    // --- Server: decode the order and apply it ---
    let node = codec.decode(&request)?;
    let order = MoveMessage::from_wire(&mut server, &node)?;
    let unit = server
        .lookup(order.unit())
        .expect("demo graph contains the ordered unit");
    let (dx, dy) = order.direction().offset();
    let (x, y) = position_of(&unit);
    let moved = ObjectRef::new(Unit::new(
        order.unit().as_str(),
        "player:1",
        x + dx,
        y + dy,
        1,
    ));
    server.register(moved.clone());
    tracing::info!(unit = %order.unit(), direction = order.direction().as_str(), "server applied move");

    // --- Server: push the changed object back as an update ---
    let update = UpdateMessage::new(vec![moved]);
    let response = codec.encode(&update.to_wire())?;
    tracing::info!(bytes = response.len(), "server sent update");

    // --- Client: decode the update through the registry ---
    let node = codec.decode(&response)?;
    let received = registry.decode(&mut client, &node)?;
    tracing::info!(message_type = received.message_type(), "client received");

    let scout = client
        .lookup(&ObjectId::new("unit:1"))
        .expect("update interned the moved unit");
    let (x, y) = position_of(&scout);
    tracing::info!(unit = %scout.id(), x, y, "client graph updated");
    assert_eq!((x, y), (5, 5));

    Ok(())
}

/// Reads a unit's position back out of its wire form. The demo keeps
/// no typed copy of the graph, so it asks the object itself.
fn position_of(unit: &ObjectRef) -> (i32, i32) {
    let node = unit.to_wire();
    let x = node.attribute("x").and_then(|v| v.parse().ok()).unwrap_or(0);
    let y = node.attribute("y").and_then(|v| v.parse().ok()).unwrap_or(0);
    (x, y)
}
