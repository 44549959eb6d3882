use chrono::{TimeZone, Utc};

use crate::character::{
    CharClass, Character, EquipmentSlot, Item, ItemQuality, Resistances, Stats,
};

/// A fully populated level 85 sorceress
pub fn sorceress(name: &str) -> Character {
    let mut character = Character {
        name: name.to_string(),
        created: Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap(),
        char_class: CharClass::Sorceress,
        is_hardcore: false,
        is_expansion: true,
        is_dead: false,
        deaths: 2,
        level: 85,
        experience: 1_764_543_000,
        stats: Stats {
            strength: 156,
            dexterity: 35,
            vitality: 410,
            energy: 35,
        },
        resistances: Resistances {
            fire: 75,
            cold: 62,
            lightning: 75,
            poison: 30,
        },
        gold: 120_000,
        gold_stash: 2_500_000,
        faster_cast_rate: 105,
        faster_hit_recovery: 60,
        faster_run_walk: 40,
        increased_attack_speed: 0,
        magic_find: 280,
        ..Default::default()
    };
    character.equipment.insert(
        EquipmentSlot::Head,
        Item {
            name: "Harlequin Crest".to_string(),
            base_name: "Shako".to_string(),
            quality: ItemQuality::Unique,
            properties: vec![
                "+2 to All Skills".to_string(),
                "50% Better Chance of Getting Magic Items".to_string(),
            ],
        },
    );
    character
}

/// A fresh level 1 hardcore barbarian with nothing equipped
pub fn barbarian(name: &str) -> Character {
    Character {
        name: name.to_string(),
        created: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        char_class: CharClass::Barbarian,
        is_hardcore: true,
        is_expansion: true,
        level: 1,
        stats: Stats {
            strength: 30,
            dexterity: 20,
            vitality: 25,
            energy: 10,
        },
        ..Default::default()
    }
}
