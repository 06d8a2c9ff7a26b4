//! Game domain objects for Palisade.
//!
//! This crate owns the entities that ride inside protocol messages
//! and the context used to decode them:
//!
//! - **Identity** ([`ObjectId`], [`ObjectRef`]) — stable string ids
//!   and shared handles into the object graph.
//! - **The object trait** ([`GameObject`]) — id, wire kind, and the
//!   object's own serializer.
//! - **The context** ([`Game`]) — the object graph plus the open
//!   tag → constructor decode table.
//! - **Concrete entities** ([`Unit`], [`Player`]).
//!
//! The message layer (`palisade-net`) holds [`ObjectRef`] handles and
//! delegates all object (de)serialization here; it never looks inside
//! an entity.

mod error;
mod game;
mod object;
mod player;
mod unit;

pub use error::ModelError;
pub use game::{Game, ObjectDecodeFn};
pub use object::{GameObject, ObjectId, ObjectRef};
pub use player::Player;
pub use unit::Unit;
