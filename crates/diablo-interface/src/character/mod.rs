//! Character state published by the game-memory reader.
//!
//! The reader owns the mutable side: it builds [`Character`] values from
//! process memory and publishes them into a [`LiveCharacters`] source.
//! Request handlers only ever see immutable [`CharacterHandle`]s captured
//! from one [`TrackedCharacters`] read.

mod handle;
mod item;
mod model;
mod source;

#[cfg(test)]
pub(crate) mod fixture;

pub use handle::*;
pub use item::*;
pub use model::*;
pub use source::*;
