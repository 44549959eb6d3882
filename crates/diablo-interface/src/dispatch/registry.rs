use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::dispatch::RequestHandler;
use crate::error::{Error, Result};
use crate::request::PATH_SEPARATOR;

/// Routing table from lower-cased resource root to handler
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn RequestHandler>>,
}

impl HandlerRegistry {
    /// Create a new registry builder
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// Look up the handler for a root, ignoring case
    pub fn get(&self, root: &str) -> Option<&Arc<dyn RequestHandler>> {
        self.handlers.get(&root.to_ascii_lowercase())
    }

    pub fn contains(&self, root: &str) -> bool {
        self.get(root).is_some()
    }

    /// Registered roots, sorted
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        roots.sort_unstable();
        roots
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("roots", &self.roots())
            .finish()
    }
}

/// Builder for HandlerRegistry
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    registrations: Vec<(String, Arc<dyn RequestHandler>)>,
}

impl HandlerRegistryBuilder {
    /// Bind a handler to a resource root
    pub fn register<H>(self, root: impl Into<String>, handler: H) -> Self
    where
        H: RequestHandler + 'static,
    {
        self.register_shared(root, Arc::new(handler))
    }

    /// Bind an already shared handler to a resource root
    pub fn register_shared(
        mut self,
        root: impl Into<String>,
        handler: Arc<dyn RequestHandler>,
    ) -> Self {
        self.registrations.push((root.into(), handler));
        self
    }

    /// Build the registry.
    ///
    /// Fails on an empty root, a root with surrounding whitespace or the path
    /// separator, or a root registered twice (compared case-insensitively).
    pub fn build(self) -> Result<HandlerRegistry> {
        let mut handlers = HashMap::with_capacity(self.registrations.len());

        for (root, handler) in self.registrations {
            if root.is_empty() || root.trim() != root || root.contains(PATH_SEPARATOR) {
                return Err(Error::InvalidHandlerRoot(root));
            }

            match handlers.entry(root.to_ascii_lowercase()) {
                Entry::Occupied(_) => return Err(Error::DuplicateHandler(root)),
                Entry::Vacant(slot) => {
                    slot.insert(handler);
                }
            }
        }

        Ok(HandlerRegistry { handlers })
    }
}
