//! Prelude module for convenient imports
//!
//! ```ignore
//! use diablo_interface::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Request model: `Request`, `InboundRequest`, `LegacyRequest`
//! - Responses: `Response`, `ResponseStatus`, `Payload`
//! - Routing: `Dispatcher`, `HandlerRegistry`, `RequestHandler`
//! - Built-in handlers and the live character source
//! - Error handling: `Error`, `Result`

// Request model
pub use crate::legacy::LegacyRequest;
pub use crate::request::{InboundRequest, Request};

// Responses
pub use crate::response::{Payload, Response, ResponseStatus};
pub use crate::snapshot::{CharacterSnapshot, ItemSnapshot};

// Routing
pub use crate::dispatch::{Dispatcher, HandlerRegistry, RequestHandler};
pub use crate::handlers::{CharacterRequestHandler, ItemRequestHandler, default_registry};

// Character state
pub use crate::character::{Character, CharacterHandle, CharacterSource, LiveCharacters};

// Error handling
pub use crate::error::{Error, Result};
