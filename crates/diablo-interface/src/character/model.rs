use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::character::{EquipmentSlot, Item};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum CharClass {
    #[default]
    Amazon = 0,
    Sorceress = 1,
    Necromancer = 2,
    Paladin = 3,
    Barbarian = 4,
    Druid = 5,
    Assassin = 6,
}

/// Base attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub dexterity: i32,
    pub vitality: i32,
    pub energy: i32,
}

/// Elemental resistances after difficulty penalty; may be negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistances {
    pub fire: i32,
    pub cold: i32,
    pub lightning: i32,
    pub poison: i32,
}

/// One character as read from game memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
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
    /// Currently equipped items keyed by body location
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentSlot, Item>,
}

impl Character {
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipment.get(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class_parse_and_display() {
        assert_eq!("druid".parse::<CharClass>().unwrap(), CharClass::Druid);
        assert_eq!(CharClass::Necromancer.to_string(), "Necromancer");
    }

    #[test]
    fn test_equipped_lookup() {
        let mut character = Character::default();
        assert!(character.equipped(EquipmentSlot::Belt).is_none());

        character.equipment.insert(
            EquipmentSlot::Belt,
            Item {
                name: "Arachnid Mesh".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(
            character.equipped(EquipmentSlot::Belt).unwrap().name,
            "Arachnid Mesh"
        );
    }
}
