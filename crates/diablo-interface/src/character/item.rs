use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Body location an item is equipped in.
///
/// Discriminants follow the game's body location ids. Parsing is
/// case-insensitive so that `items/head` and `items/Head` resolve alike.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum EquipmentSlot {
    Head = 1,
    Amulet = 2,
    BodyArmor = 3,
    PrimaryRight = 4,
    PrimaryLeft = 5,
    RingRight = 6,
    RingLeft = 7,
    Belt = 8,
    Boots = 9,
    Gloves = 10,
    SecondaryRight = 11,
    SecondaryLeft = 12,
}

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
#[repr(u8)]
pub enum ItemQuality {
    Low = 1,
    #[default]
    Normal = 2,
    Superior = 3,
    Magic = 4,
    Set = 5,
    Rare = 6,
    Unique = 7,
    Crafted = 8,
}

/// An equipped item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name (e.g. "Harlequin Crest")
    pub name: String,
    /// Base item name (e.g. "Shako")
    pub base_name: String,
    pub quality: ItemQuality,
    /// Property lines as shown in the item tooltip
    #[serde(default)]
    pub properties: Vec<String>,
}
