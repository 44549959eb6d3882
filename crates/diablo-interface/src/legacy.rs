use serde::{Deserialize, Serialize};

use crate::request::Request;

/// Resource root that legacy equipment requests map onto
pub const LEGACY_ITEMS_ROOT: &str = "items";

/// Flat request shape sent by older overlay clients: `{"equipmentSlot": "Head"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRequest {
    pub equipment_slot: String,
}

impl LegacyRequest {
    pub fn new(equipment_slot: impl Into<String>) -> Self {
        Self {
            equipment_slot: equipment_slot.into(),
        }
    }

    /// Adapt to `items/<slot>` with no arguments.
    ///
    /// The slot is passed through verbatim; the item handler validates it.
    pub fn into_request(self) -> Request {
        Request::from_resource(format!("{}/{}", LEGACY_ITEMS_ROOT, self.equipment_slot))
    }
}

impl From<LegacyRequest> for Request {
    fn from(legacy: LegacyRequest) -> Self {
        legacy.into_request()
    }
}
