use std::sync::Arc;

use tracing::debug;

use crate::dispatch::HandlerRegistry;
use crate::request::{InboundRequest, Request};
use crate::response::Response;

/// Routes requests to the handler registered for their resource root.
///
/// A root with no handler yields `not_found`, the same status a handler
/// returns for a missing entity, so callers cannot probe which roots exist.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<HandlerRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Dispatch one request; the handler's response is returned unchanged
    pub fn dispatch(&self, request: &Request) -> Response {
        let root = request.root();
        let Some(handler) = self.registry.get(root) else {
            debug!("No handler for resource root {:?}", root);
            return Response::not_found();
        };

        let arguments = request.handler_arguments();
        debug!(
            "Dispatching {} with arguments {:?}",
            request.resource(),
            arguments
        );
        handler.handle(request, &arguments)
    }

    /// Normalize any accepted request shape, then dispatch it
    pub fn dispatch_inbound(&self, inbound: InboundRequest) -> Response {
        self.dispatch(&inbound.into_request())
    }
}
