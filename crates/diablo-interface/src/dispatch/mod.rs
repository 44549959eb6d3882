//! Resource routing.
//!
//! A [`HandlerRegistry`] maps resource roots (`character`, `items`, ...) to
//! [`RequestHandler`]s. It is built once at startup and shared with a
//! [`Dispatcher`], which routes each request by its root segment and falls
//! back to `not_found` on a miss.

mod dispatcher;
mod registry;

pub use dispatcher::*;
pub use registry::*;

use crate::request::Request;
use crate::response::Response;

/// A unit of logic bound to one resource root.
///
/// `arguments` is [`Request::handler_arguments`]: the path segments after the
/// root followed by the explicit arguments. Handlers report every outcome,
/// including bad input and internal faults, through the returned
/// [`Response`].
pub trait RequestHandler: Send + Sync {
    fn handle(&self, request: &Request, arguments: &[String]) -> Response;
}
