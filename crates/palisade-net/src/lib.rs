//! Protocol messages for Palisade.
//!
//! This crate is the message layer of the client-server protocol:
//! typed envelopes that carry ordered string attributes and embedded
//! game objects, and round-trip losslessly through the wire tree.
//!
//! - **Capabilities** ([`AttributeMessage`], [`ObjectMessage`]) — the
//!   attribute bag and the child list, composed rather than
//!   inherited. [`ObjectMessage`] defines the tree encoding: type as
//!   the tag, attributes in declared order, children serialized by
//!   their own objects.
//! - **Dispatch** ([`Message`] trait, [`MessageRegistry`]) — the open
//!   set of concrete message types, decoded by tag through a
//!   constructor table.
//! - **Concrete types** ([`UpdateMessage`], [`MoveMessage`]) — the
//!   generic changed-objects carrier and a typed order with
//!   hand-driven child decoding.
//! - **Errors** ([`MessageError`]) — including the terminal
//!   tag-mismatch diagnostic for desynchronized streams.
//!
//! # Architecture
//!
//! ```text
//! bytes ↔ WireNode (palisade-wire)
//!              ↕
//!        messages (this crate) — children decoded via Game (palisade-model)
//! ```
//!
//! Messages are single-owner, in-memory values: construction and
//! serialization are synchronous and non-blocking, and a message
//! instance belongs to one logical flow at a time. Blocking I/O and
//! connection handling live in the transport layer, not here.

mod attribute;
mod error;
mod message;
mod movement;
mod object;
mod update;

pub use attribute::AttributeMessage;
pub use error::MessageError;
pub use message::{Message, MessageDecodeFn, MessageRegistry};
pub use movement::{Direction, MoveMessage};
pub use object::ObjectMessage;
pub use update::UpdateMessage;
