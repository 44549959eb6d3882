use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use tracing::debug;

use crate::character::{Character, CharacterHandle};
use crate::error::Result;

/// The current and active characters as published together.
///
/// A handler reads this once per request so that the snapshot and the
/// `isCurrentCharacter` flag come from the same point in time.
#[derive(Debug, Clone, Default)]
pub struct TrackedCharacters {
    current: Option<CharacterHandle>,
    active: Option<CharacterHandle>,
}

impl TrackedCharacters {
    pub fn new(current: Option<CharacterHandle>, active: Option<CharacterHandle>) -> Self {
        Self { current, active }
    }

    /// Character the reader is tracking as the player's character
    pub fn current(&self) -> Option<&CharacterHandle> {
        self.current.as_ref()
    }

    /// Character currently foregrounded in the game
    pub fn active(&self) -> Option<&CharacterHandle> {
        self.active.as_ref()
    }

    /// True when `handle` is the same entity as the current character.
    ///
    /// Always false when there is no current character.
    pub fn is_current(&self, handle: &CharacterHandle) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.is_same(handle))
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.active.is_none()
    }
}

/// Read side of the live character state
pub trait CharacterSource: Send + Sync {
    /// Capture the current and active characters in one atomic read
    fn tracked(&self) -> Result<Arc<TrackedCharacters>>;
}

/// In-process character state the memory reader publishes into.
///
/// Every publish swaps in a new `Arc<TrackedCharacters>`. The lock is held
/// only long enough to clone or replace that pointer, so readers never block
/// on the producer while building a response. A poisoned lock is recovered:
/// the guarded value is always a whole `Arc`, never a half-written state.
#[derive(Debug, Default)]
pub struct LiveCharacters {
    state: RwLock<Arc<TrackedCharacters>>,
}

impl LiveCharacters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both characters at once
    pub fn publish(
        &self,
        current: Option<CharacterHandle>,
        active: Option<CharacterHandle>,
    ) -> Result<()> {
        debug!(
            "Publishing characters: current={:?}, active={:?}",
            current.as_ref().map(|c| c.name.as_str()),
            active.as_ref().map(|c| c.name.as_str())
        );
        self.swap(|_| TrackedCharacters::new(current, active))
    }

    pub fn set_current(&self, current: Option<CharacterHandle>) -> Result<()> {
        self.swap(|tracked| TrackedCharacters::new(current, tracked.active.clone()))
    }

    pub fn set_active(&self, active: Option<CharacterHandle>) -> Result<()> {
        self.swap(|tracked| TrackedCharacters::new(tracked.current.clone(), active))
    }

    /// Drop both characters (e.g. the game process exited)
    pub fn clear(&self) -> Result<()> {
        self.publish(None, None)
    }

    /// Apply a change to the current character.
    ///
    /// The character is copied and modified outside the lock, then published
    /// as a new handle; handles already captured by readers keep the old
    /// value. If the active character was the same entity it is moved to the
    /// new handle as well.
    ///
    /// Returns `false` when there is no current character, or when another
    /// publish replaced the current character while `update` ran. In that
    /// case nothing is written.
    pub fn update_current<F>(&self, update: F) -> Result<bool>
    where
        F: FnOnce(&mut Character),
    {
        let Some(old) = self.read().current.clone() else {
            return Ok(false);
        };

        let mut character = old.character().clone();
        update(&mut character);
        let updated = CharacterHandle::new(character);

        let mut guard = self.write();
        if !guard.is_current(&old) {
            debug!("Current character changed during update, dropping it");
            return Ok(false);
        }

        let active = match &guard.active {
            Some(active) if active.is_same(&old) => Some(updated.clone()),
            other => other.clone(),
        };
        *guard = Arc::new(TrackedCharacters::new(Some(updated), active));
        Ok(true)
    }

    fn swap<F>(&self, next: F) -> Result<()>
    where
        F: FnOnce(&TrackedCharacters) -> TrackedCharacters,
    {
        let mut guard = self.write();
        let replacement = next(&**guard);
        *guard = Arc::new(replacement);
        Ok(())
    }

    fn read(&self) -> Arc<TrackedCharacters> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<TrackedCharacters>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CharacterSource for LiveCharacters {
    fn tracked(&self) -> Result<Arc<TrackedCharacters>> {
        Ok(self.read())
    }
}
