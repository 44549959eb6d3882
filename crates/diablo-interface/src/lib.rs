//! # diablo-interface
//!
//! Resource-addressed query protocol for the Diablo II companion server.
//!
//! This crate provides:
//! - The request model and the legacy `equipmentSlot` adapter
//! - The response envelope and the named snapshot payloads
//! - A handler registry and dispatcher that route requests by resource root
//! - Character and item handlers reading from a live character source
//!
//! Transport (sockets, pipes, HTTP) is left to the caller: feed a
//! [`Request`] to a [`Dispatcher`] and serialize the [`Response`] it returns.
//!
//! ```ignore
//! use std::sync::Arc;
//! use diablo_interface::prelude::*;
//!
//! let characters = Arc::new(LiveCharacters::new());
//! let registry = HandlerRegistry::builder()
//!     .register("character", CharacterRequestHandler::new(characters.clone()))
//!     .register("items", ItemRequestHandler::new(characters.clone()))
//!     .build()?;
//! let dispatcher = Dispatcher::new(Arc::new(registry));
//!
//! let response = dispatcher.dispatch(&Request::new("character/current", Vec::new())?);
//! println!("{}", serde_json::to_string(&response)?);
//! ```

pub mod character;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod legacy;
pub mod prelude;
pub mod request;
pub mod response;
pub mod snapshot;

pub use character::{
    CharClass, Character, CharacterHandle, CharacterSource, EquipmentSlot, Item, ItemQuality,
    LiveCharacters, Resistances, Stats, TrackedCharacters,
};
pub use dispatch::{Dispatcher, HandlerRegistry, HandlerRegistryBuilder, RequestHandler};
pub use error::{Error, Result};
pub use handlers::{
    BUILTIN_RESOURCES, CharacterRequestHandler, CharacterSelector, ItemRequestHandler,
    default_registry, registry_for,
};
pub use legacy::LegacyRequest;
pub use request::{InboundRequest, Request};
pub use response::{Payload, Response, ResponseStatus};
pub use snapshot::{CharacterSnapshot, ItemSnapshot, MessagePayload};
