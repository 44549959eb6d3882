//! Built-in request handlers.

mod character;
mod items;

pub use character::*;
pub use items::*;

use std::sync::Arc;

use tracing::info;

use crate::character::CharacterSource;
use crate::dispatch::HandlerRegistry;
use crate::error::{Error, Result};

/// Resource roots served by the built-in handlers
pub const BUILTIN_RESOURCES: [&str; 2] = [CHARACTER_RESOURCE, ITEMS_RESOURCE];

/// Registry serving every built-in resource from one character source
pub fn default_registry(source: Arc<dyn CharacterSource>) -> Result<HandlerRegistry> {
    registry_for(&BUILTIN_RESOURCES, source)
}

/// Registry serving only the named built-in resources.
///
/// Names are matched case-insensitively; an unknown name is an error.
pub fn registry_for<S>(resources: &[S], source: Arc<dyn CharacterSource>) -> Result<HandlerRegistry>
where
    S: AsRef<str>,
{
    let mut builder = HandlerRegistry::builder();

    for resource in resources {
        let resource = resource.as_ref();
        builder = match resource.to_ascii_lowercase().as_str() {
            CHARACTER_RESOURCE => {
                builder.register(resource, CharacterRequestHandler::new(Arc::clone(&source)))
            }
            ITEMS_RESOURCE => {
                builder.register(resource, ItemRequestHandler::new(Arc::clone(&source)))
            }
            _ => return Err(Error::UnknownResource(resource.to_string())),
        };
    }

    let registry = builder.build()?;
    info!("Serving resources: {}", registry.roots().join(", "));
    Ok(registry)
}
