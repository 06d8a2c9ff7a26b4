//! Wire form for Palisade.
//!
//! This crate defines the structured tree that every protocol message
//! and domain object serializes into:
//!
//! - **Nodes** ([`WireNode`], [`Attributes`]) — a tag, ordered string
//!   attributes, and ordered child nodes.
//! - **Reader** ([`NodeReader`]) — a pull cursor for message types
//!   that decode a stream child by child.
//! - **Codec** ([`WireCodec`] trait, [`JsonWireCodec`]) — how a tree
//!   becomes bytes and back.
//! - **Errors** ([`WireError`]) — what can go wrong in between.
//!
//! # Architecture
//!
//! The wire layer knows nothing about message types or game objects —
//! it only defines the tree and its byte form. The model and message
//! layers build on top:
//!
//! ```text
//! bytes ↔ WireNode (this crate) ↔ messages / domain objects
//! ```

mod codec;
mod error;
mod node;
mod reader;

pub use codec::WireCodec;
#[cfg(feature = "json")]
pub use codec::JsonWireCodec;
pub use error::WireError;
pub use node::{Attributes, WireNode};
pub use reader::NodeReader;
