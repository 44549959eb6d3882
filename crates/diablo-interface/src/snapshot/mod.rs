//! Named payload types.
//!
//! Each resource kind has one snapshot type whose serde layout is its wire
//! contract. Snapshots are built fresh from a captured character handle on
//! every successful request and never mutated afterwards.

mod character;
mod item;

pub use character::*;
pub use item::*;

use serde::Serialize;

/// Explanation carried by `invalid` and `error` responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub message: String,
}

impl MessagePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
