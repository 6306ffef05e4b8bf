//! Nearest-neighbor route construction for a courier's daily deliveries.
//!
//! Greedy approximation: from the warehouse, always drive to the closest
//! unvisited geocoded stop. Not an exact TSP solver, no 2-opt pass; the
//! O(n²) scan targets daily delivery counts in the tens.

use thiserror::Error;
use tracing::debug;

use crate::defaults::STOP_SERVICE_MINUTES;
use crate::services::geo;
use crate::types::{
    Courier, Delivery, RoutePlan, RouteStop, Warehouse, Waypoint, WaypointKind,
};

/// Route construction failures. All are detected before the first stop is
/// chosen; a partial route is never returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("cannot optimize a route without the courier's GPS location")]
    MissingCourierLocation,

    #[error("warehouse `{name}` has no coordinates to start the route from")]
    MissingWarehouseLocation { name: String },
}

/// Build the visiting order for a courier's pending deliveries.
///
/// The courier must have a reported position and the warehouse must be
/// geocoded. Deliveries whose destination lacks coordinates are never used
/// to seed distance comparisons; they are appended after all located stops
/// in their original relative order with a zero leg distance. When *no*
/// delivery is located, the input order is returned untouched with the
/// plan flagged `missing_gps` and no metrics computed.
///
/// Inputs are only read; persisting the plan is the caller's job.
pub fn optimize_delivery_route(
    courier: &Courier,
    warehouse: &Warehouse,
    deliveries: &[Delivery],
) -> Result<RoutePlan, RouteError> {
    if courier.position().is_none() {
        return Err(RouteError::MissingCourierLocation);
    }

    let origin = warehouse
        .coordinates()
        .ok_or_else(|| RouteError::MissingWarehouseLocation {
            name: warehouse.name.clone(),
        })?;

    let (located, unlocated): (Vec<&Delivery>, Vec<&Delivery>) =
        deliveries.iter().partition(|d| d.is_located());

    if located.is_empty() {
        debug!(
            "No geocoded deliveries for courier {}; returning input order as-is",
            courier.name
        );
        return Ok(unordered_plan(warehouse, deliveries));
    }

    let located_count = located.len();
    let unlocated_count = unlocated.len();

    let mut cursor = Waypoint {
        kind: WaypointKind::Warehouse,
        name: warehouse.name.clone(),
        coordinates: origin,
    };
    let mut remaining = located;
    let mut stops: Vec<RouteStop> = Vec::with_capacity(deliveries.len());
    let mut total_distance_km = 0.0;

    while !remaining.is_empty() {
        let found = geo::nearest(
            cursor.coordinates,
            remaining
                .iter()
                .enumerate()
                .filter_map(|(i, d)| d.customer.coordinates().map(|at| ((i, at), at))),
        );

        let Some(((index, destination), distance)) = found else {
            break;
        };

        let delivery = remaining.remove(index);
        total_distance_km += distance;
        stops.push(RouteStop {
            order: (stops.len() + 1) as u32,
            delivery: delivery.clone(),
            distance_from_previous_km: distance,
            missing_gps: false,
        });

        cursor = Waypoint {
            kind: WaypointKind::Customer,
            name: delivery.customer.name.clone(),
            coordinates: destination,
        };
    }

    // Travel at the platform average speed, plus a fixed service slot for
    // every stop on the plan, located or not.
    let travel_hours = geo::travel_time_hours(total_distance_km);
    let service_hours = (located_count + unlocated_count) as f64 * (STOP_SERVICE_MINUTES / 60.0);
    let estimated_time_hours = travel_hours + service_hours;

    for delivery in unlocated {
        stops.push(RouteStop {
            order: (stops.len() + 1) as u32,
            delivery: delivery.clone(),
            distance_from_previous_km: 0.0,
            missing_gps: true,
        });
    }

    debug!(
        "Route optimized for {}: {} stops ({} without GPS), {:.2} km",
        courier.name,
        stops.len(),
        unlocated_count,
        total_distance_km
    );

    Ok(RoutePlan {
        warehouse: warehouse.clone(),
        ordered_deliveries: stops.iter().map(|s| s.delivery.clone()).collect(),
        stops,
        total_distance_km: geo::round2(total_distance_km),
        estimated_time_hours: geo::round2(estimated_time_hours),
        total_stops: located_count + unlocated_count,
        located_stops: located_count,
        unlocated_stops: unlocated_count,
        missing_gps: false,
    })
}

/// Degenerate plan for a delivery set with no GPS data at all: caller
/// order preserved, zero distances, no time estimate.
fn unordered_plan(warehouse: &Warehouse, deliveries: &[Delivery]) -> RoutePlan {
    let stops = deliveries
        .iter()
        .enumerate()
        .map(|(i, delivery)| RouteStop {
            order: (i + 1) as u32,
            delivery: delivery.clone(),
            distance_from_previous_km: 0.0,
            missing_gps: true,
        })
        .collect();

    RoutePlan {
        warehouse: warehouse.clone(),
        ordered_deliveries: deliveries.to_vec(),
        stops,
        total_distance_km: 0.0,
        estimated_time_hours: 0.0,
        total_stops: deliveries.len(),
        located_stops: 0,
        unlocated_stops: deliveries.len(),
        missing_gps: true,
    }
}
