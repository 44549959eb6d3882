use std::sync::Arc;

use tracing::warn;

use crate::character::{CharacterSource, EquipmentSlot};
use crate::dispatch::RequestHandler;
use crate::request::Request;
use crate::response::Response;
use crate::snapshot::ItemSnapshot;

/// Resource root served by [`ItemRequestHandler`], also the target of
/// legacy `equipmentSlot` requests
pub const ITEMS_RESOURCE: &str = crate::legacy::LEGACY_ITEMS_ROOT;

const INVALID_MESSAGE: &str = "item requests require one argument: an equipment slot name";
const SOURCE_ERROR_MESSAGE: &str = "character state is unavailable";

/// Answers `items/<slot>` with the item the current character has equipped
/// there.
pub struct ItemRequestHandler {
    source: Arc<dyn CharacterSource>,
}

impl ItemRequestHandler {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self { source }
    }
}

impl RequestHandler for ItemRequestHandler {
    fn handle(&self, request: &Request, arguments: &[String]) -> Response {
        let Some(slot) = arguments
            .first()
            .and_then(|argument| argument.parse::<EquipmentSlot>().ok())
        else {
            return Response::invalid(INVALID_MESSAGE);
        };

        let tracked = match self.source.tracked() {
            Ok(tracked) => tracked,
            Err(e) => {
                warn!("Failed to read characters for {}: {}", request.resource(), e);
                return Response::error(SOURCE_ERROR_MESSAGE);
            }
        };

        let item = tracked
            .current()
            .and_then(|character| character.equipped(slot))
            .map(|item| ItemSnapshot::capture(slot, item));

        match item {
            Some(snapshot) => Response::success(snapshot.into()),
            None => Response::not_found(),
        }
    }
}
