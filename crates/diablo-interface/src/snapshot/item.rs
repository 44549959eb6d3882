use serde::Serialize;

use crate::character::{EquipmentSlot, Item, ItemQuality};

/// One equipped item, the `items/<slot>` wire contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub slot: EquipmentSlot,
    pub name: String,
    pub base_name: String,
    pub quality: ItemQuality,
    pub properties: Vec<String>,
}

impl ItemSnapshot {
    pub fn capture(slot: EquipmentSlot, item: &Item) -> Self {
        Self {
            slot,
            name: item.name.clone(),
            base_name: item.base_name.clone(),
            quality: item.quality,
            properties: item.properties.clone(),
        }
    }
}
