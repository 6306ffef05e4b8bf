//! Route types

use serde::{Deserialize, Serialize};

use super::{Coordinates, Delivery, Warehouse};

/// What kind of location the route cursor sits at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointKind {
    Warehouse,
    Customer,
}

/// A point the route has reached: the origin depot or a visited customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub kind: WaypointKind,
    pub name: String,
    pub coordinates: Coordinates,
}

/// A stop on the planned route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    /// 1-based visiting order
    pub order: u32,
    pub delivery: Delivery,
    /// Leg distance from the previous stop (km, unrounded); 0 for stops
    /// without GPS data
    pub distance_from_previous_km: f64,
    /// Destination had no usable coordinates and was appended after the
    /// located stops
    pub missing_gps: bool,
}

/// Result of route optimization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// Origin warehouse the route leaves from
    pub warehouse: Warehouse,
    /// Deliveries in visiting order (located first, then any without GPS)
    pub ordered_deliveries: Vec<Delivery>,
    /// Step-by-step route detail, parallel to `ordered_deliveries`
    pub stops: Vec<RouteStop>,
    /// Sum of located leg distances (km, rounded to 2 decimals)
    pub total_distance_km: f64,
    /// Travel plus per-stop service time (hours, rounded to 2 decimals)
    pub estimated_time_hours: f64,
    pub total_stops: usize,
    pub located_stops: usize,
    pub unlocated_stops: usize,
    /// True when no delivery had GPS data and no ordering was attempted
    pub missing_gps: bool,
}
