//! Warehouse types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Coordinates;

/// Warehouse entity - an origin depot deliveries leave from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: Uuid,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_primary: bool,
    pub is_active: bool,
}

impl Warehouse {
    /// Depot position, present only when both coordinates are set.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// Pick the origin warehouse: the first primary one, else the first active
/// one, in the order the caller supplies. Route planning takes the chosen
/// warehouse explicitly, so the preference rule lives here at the call
/// boundary instead of behind a hidden lookup.
pub fn resolve_origin(warehouses: &[Warehouse]) -> Option<&Warehouse> {
    warehouses
        .iter()
        .find(|w| w.is_primary)
        .or_else(|| warehouses.iter().find(|w| w.is_active))
}
