//! Geographic calculations

use crate::defaults::AVERAGE_SPEED_KMH;
use crate::types::Coordinates;

/// Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Estimate travel time in hours at the platform's average courier speed
pub fn travel_time_hours(distance_km: f64) -> f64 {
    distance_km / AVERAGE_SPEED_KMH
}

/// Round a summary figure to 2 decimals. Presentation only - comparisons
/// and running totals always use unrounded values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Find the candidate closest to `from`.
///
/// Pure fold over `(candidate, position)` pairs: the accumulator holds the
/// best candidate and its distance, and is replaced only on a strictly
/// smaller distance, so ties keep the first-seen candidate. Returns `None`
/// for an empty candidate sequence. Callers filter out candidates without
/// a position before handing them in.
pub fn nearest<T>(
    from: Coordinates,
    candidates: impl IntoIterator<Item = (T, Coordinates)>,
) -> Option<(T, f64)> {
    candidates.into_iter().fold(None, |best, (candidate, at)| {
        let distance = haversine_distance(&from, &at);
        match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((candidate, distance)),
        }
    })
}
