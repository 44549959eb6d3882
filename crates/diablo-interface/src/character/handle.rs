use std::ops::Deref;
use std::sync::Arc;

use crate::character::Character;

/// Shared reference to one published character.
///
/// Handles deliberately do not implement `PartialEq`: two characters with equal
/// fields are still different entities. Use [`CharacterHandle::is_same`] for
/// identity and `Option<CharacterHandle>` for absence.
#[derive(Debug, Clone)]
pub struct CharacterHandle(Arc<Character>);

impl CharacterHandle {
    pub fn new(character: Character) -> Self {
        Self(Arc::new(character))
    }

    /// True when both handles point at the same published character
    pub fn is_same(&self, other: &CharacterHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn character(&self) -> &Character {
        &self.0
    }
}

impl Deref for CharacterHandle {
    type Target = Character;

    fn deref(&self) -> &Character {
        &self.0
    }
}

impl From<Character> for CharacterHandle {
    fn from(character: Character) -> Self {
        Self::new(character)
    }
}
