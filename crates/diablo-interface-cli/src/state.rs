//! Character state file.
//!
//! Stands in for the game-memory reader: a JSON document listing characters
//! plus the indices of the current and active ones.
//!
//! ```json
//! { "characters": [ { "name": "Vex", ... } ], "current": 0, "active": 0 }
//! ```
//!
//! Equal indices publish the *same* handle, so `isCurrentCharacter` behaves as
//! it does with a live reader.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use diablo_interface::{Character, CharacterHandle, LiveCharacters};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateFile {
    pub characters: Vec<Character>,
    pub current: Option<usize>,
    pub active: Option<usize>,
}

impl StateFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid state file {}", path.display()))
    }

    /// Build handles for the current and active characters.
    ///
    /// Fails if an index points past the character list.
    pub fn into_handles(self) -> Result<(Option<CharacterHandle>, Option<CharacterHandle>)> {
        let count = self.characters.len();
        for (label, index) in [("current", self.current), ("active", self.active)] {
            if let Some(index) = index
                && index >= count
            {
                bail!(
                    "{} index {} out of range ({} characters)",
                    label,
                    index,
                    count
                );
            }
        }

        let handles: Vec<CharacterHandle> = self
            .characters
            .into_iter()
            .map(CharacterHandle::new)
            .collect();
        let pick = |index: Option<usize>| index.map(|i| handles[i].clone());
        Ok((pick(self.current), pick(self.active)))
    }

    /// Replace the published characters with this file's
    pub fn publish_into(self, live: &LiveCharacters) -> Result<()> {
        let (current, active) = self.into_handles()?;
        live.publish(current, active)?;
        Ok(())
    }
}

/// Load a state file and publish it
pub fn load_into<P: AsRef<Path>>(path: P, live: &LiveCharacters) -> Result<()> {
    let path = path.as_ref();
    let state = StateFile::load(path)?;
    debug!(
        "Loaded {} characters from {}",
        state.characters.len(),
        path.display()
    );
    state.publish_into(live)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diablo_interface::CharacterSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_state(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    fn character_json(name: &str) -> String {
        format!(
            r#"{{
                "name": "{}",
                "created": "2024-03-09T18:30:00Z",
                "char_class": "Paladin",
                "is_hardcore": false,
                "is_expansion": true,
                "is_dead": false,
                "deaths": 0,
                "level": 70,
                "experience": 600000000,
                "stats": {{ "strength": 100, "dexterity": 80, "vitality": 300, "energy": 25 }},
                "resistances": {{ "fire": 75, "cold": 75, "lightning": 75, "poison": 75 }},
                "gold": 1000,
                "gold_stash": 50000,
                "faster_cast_rate": 0,
                "faster_hit_recovery": 30,
                "faster_run_walk": 20,
                "increased_attack_speed": 40,
                "magic_find": 120
            }}"#,
            name
        )
    }

    #[test]
    fn test_same_index_same_handle() {
        let file = write_state(&format!(
            r#"{{ "characters": [{}], "current": 0, "active": 0 }}"#,
            character_json("Hammerdin")
        ));
        let live = LiveCharacters::new();
        load_into(file.path(), &live).unwrap();

        let tracked = live.tracked().unwrap();
        let current = tracked.current().unwrap();
        assert_eq!(current.name, "Hammerdin");
        assert!(tracked.active().unwrap().is_same(current));
    }

    #[test]
    fn test_different_indices() {
        let file = write_state(&format!(
            r#"{{ "characters": [{}, {}], "current": 0, "active": 1 }}"#,
            character_json("Hammerdin"),
            character_json("Smiter")
        ));
        let live = LiveCharacters::new();
        load_into(file.path(), &live).unwrap();

        let tracked = live.tracked().unwrap();
        assert_eq!(tracked.active().unwrap().name, "Smiter");
        assert!(!tracked.is_current(tracked.active().unwrap()));
    }

    #[test]
    fn test_empty_state_file() {
        let file = write_state("{}");
        let live = LiveCharacters::new();
        load_into(file.path(), &live).unwrap();
        assert!(live.tracked().unwrap().is_empty());
    }

    #[test]
    fn test_index_out_of_range() {
        let file = write_state(&format!(
            r#"{{ "characters": [{}], "current": 3 }}"#,
            character_json("Hammerdin")
        ));
        let live = LiveCharacters::new();
        let err = load_into(file.path(), &live).unwrap_err();
        assert!(err.to_string().contains("current index 3 out of range"));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_state("{ not json");
        let live = LiveCharacters::new();
        assert!(load_into(file.path(), &live).is_err());
    }
}
