use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::character::{CharClass, Character, Resistances, Stats};

/// Point-in-time projection of one character.
///
/// Field order and names form the `character/*` wire contract:
///
/// ```json
/// { "isCurrentCharacter": true, "name": "Vex", "created": "2024-03-09T18:30:00Z",
///   "charClass": "Sorceress", "isHardcore": false, "isExpansion": true,
///   "isDead": false, "deaths": 2, "level": 85, "experience": 1764543000,
///   "stats": { "strength": 156, "dexterity": 35, "vitality": 410, "energy": 35 },
///   "resistances": { "fire": 75, "cold": 62, "lightning": 75, "poison": 30 },
///   "gold": 120000, "goldStash": 2500000, "fasterCastRate": 105,
///   "fasterHitRecovery": 60, "fasterRunWalk": 40, "increasedAttackSpeed": 0,
///   "magicFind": 280 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    pub is_current_character: bool,
    pub name: String,
    pub created: DateTime<Utc>,
    pub char_class: CharClass,
    pub is_hardcore: bool,
    pub is_expansion: bool,
    pub is_dead: bool,
    pub deaths: u32,
    pub level: u32,
    pub experience: u32,
    pub stats: Stats,
    pub resistances: Resistances,
    pub gold: u32,
    pub gold_stash: u32,
    pub faster_cast_rate: i32,
    pub faster_hit_recovery: i32,
    pub faster_run_walk: i32,
    pub increased_attack_speed: i32,
    pub magic_find: i32,
}

impl CharacterSnapshot {
    /// Project every field from the one character value
    pub fn capture(character: &Character, is_current_character: bool) -> Self {
        Self {
            is_current_character,
            name: character.name.clone(),
            created: character.created,
            char_class: character.char_class,
            is_hardcore: character.is_hardcore,
            is_expansion: character.is_expansion,
            is_dead: character.is_dead,
            deaths: character.deaths,
            level: character.level,
            experience: character.experience,
            stats: character.stats,
            resistances: character.resistances,
            gold: character.gold,
            gold_stash: character.gold_stash,
            faster_cast_rate: character.faster_cast_rate,
            faster_hit_recovery: character.faster_hit_recovery,
            faster_run_walk: character.faster_run_walk,
            increased_attack_speed: character.increased_attack_speed,
            magic_find: character.magic_find,
        }
    }
}
