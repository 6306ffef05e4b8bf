//! Courier types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Coordinates, Customer};
use crate::defaults::DEFAULT_COVERAGE_RADIUS_KM;

/// Courier entity - a delivery driver (repartidor) with a GPS position
/// and a declared coverage radius
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    pub id: Uuid,
    pub name: String,

    // Last reported GPS position (absent until the driver first reports in)
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location_updated_at: Option<DateTime<Utc>>,

    /// Maximum distance from the courier within which a customer is served (km)
    #[serde(default = "default_coverage_radius")]
    pub coverage_radius_km: f64,

    /// Free-form label of the area the courier usually works ("Chapinero", ...)
    pub coverage_zone: Option<String>,

    pub available_for_deliveries: bool,
    pub is_active: bool,
}

fn default_coverage_radius() -> f64 {
    DEFAULT_COVERAGE_RADIUS_KM
}

impl Courier {
    /// Last reported position, present only when both coordinates are set.
    pub fn position(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }

    /// Record a fresh GPS report. Persisting the change is the caller's job.
    pub fn set_location(&mut self, position: Coordinates, reported_at: DateTime<Utc>) {
        self.lat = Some(position.lat);
        self.lng = Some(position.lng);
        self.location_updated_at = Some(reported_at);
    }

    /// Straight-line distance to a customer, when both sides are geocoded.
    pub fn distance_to_customer(&self, customer: &Customer) -> Option<f64> {
        let from = self.position()?;
        let to = customer.coordinates()?;
        Some(crate::services::geo::haversine_distance(&from, &to))
    }
}
