//! Customer types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Customer entity - a delivery destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,

    // Address
    pub address: String,
    pub city: Option<String>,

    // Coordinates (from geocoding, may have failed or not run yet)
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Customer {
    /// Geocoded position, present only when both coordinates are set.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}
