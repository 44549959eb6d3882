use std::sync::Arc;

use strum::EnumString;
use tracing::warn;

use crate::character::CharacterSource;
use crate::dispatch::RequestHandler;
use crate::request::Request;
use crate::response::Response;
use crate::snapshot::CharacterSnapshot;

/// Resource root served by [`CharacterRequestHandler`]
pub const CHARACTER_RESOURCE: &str = "character";

const INVALID_MESSAGE: &str = "character requests require one argument: 'current' or 'active'";
const SOURCE_ERROR_MESSAGE: &str = "character state is unavailable";

/// Which tracked character a request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum CharacterSelector {
    /// The character the reader tracks as the player's
    Current,
    /// The character currently foregrounded in the game
    Active,
}

/// Answers `character/current` and `character/active`.
///
/// `isCurrentCharacter` in the payload compares the resolved character with
/// the *current* one, whichever selector was requested. An `active` request
/// therefore reports `true` when the foregrounded character is also the
/// tracked one.
pub struct CharacterRequestHandler {
    source: Arc<dyn CharacterSource>,
}

impl CharacterRequestHandler {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self { source }
    }
}

impl RequestHandler for CharacterRequestHandler {
    fn handle(&self, request: &Request, arguments: &[String]) -> Response {
        let Some(selector) = arguments
            .first()
            .and_then(|argument| argument.parse::<CharacterSelector>().ok())
        else {
            return Response::invalid(INVALID_MESSAGE);
        };

        // One read: the snapshot and the identity flag both come from `tracked`
        let tracked = match self.source.tracked() {
            Ok(tracked) => tracked,
            Err(e) => {
                warn!("Failed to read characters for {}: {}", request.resource(), e);
                return Response::error(SOURCE_ERROR_MESSAGE);
            }
        };

        let resolved = match selector {
            CharacterSelector::Current => tracked.current(),
            CharacterSelector::Active => tracked.active(),
        };

        match resolved {
            Some(handle) => {
                let snapshot = CharacterSnapshot::capture(handle, tracked.is_current(handle));
                Response::success(snapshot.into())
            }
            None => Response::not_found(),
        }
    }
}
