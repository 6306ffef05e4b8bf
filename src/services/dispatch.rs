//! Courier dispatch: eligibility checks and nearest-courier lookup.
//!
//! Everything here is pure. Persisting an assignment decided from
//! `nearest_available_courier` is the calling layer's job, after this
//! returns.

use tracing::debug;

use crate::services::geo;
use crate::types::{Courier, Customer};

/// Whether a courier may serve a customer.
///
/// The courier must be available for deliveries. When both sides have a
/// GPS position, the straight-line distance must not exceed the courier's
/// coverage radius (non-strict). When either position is missing the
/// distance check is skipped entirely and the courier is eligible; legacy
/// records without GPS data still get served.
pub fn can_serve(courier: &Courier, customer: &Customer) -> bool {
    if !courier.available_for_deliveries {
        return false;
    }

    match courier.distance_to_customer(customer) {
        Some(distance) => distance <= courier.coverage_radius_km,
        None => true,
    }
}

/// Find the closest active, available courier that can serve the customer.
///
/// Returns the courier together with its distance in km, or `None` when the
/// customer is not geocoded or no positioned courier qualifies. Ties keep
/// the first courier in the caller-supplied order.
pub fn nearest_available_courier<'a>(
    couriers: &'a [Courier],
    customer: &Customer,
) -> Option<(&'a Courier, f64)> {
    let destination = customer.coordinates()?;

    let found = geo::nearest(
        destination,
        couriers
            .iter()
            .filter(|c| c.is_active && can_serve(c, customer))
            .filter_map(|c| c.position().map(|at| (c, at))),
    );

    if let Some((courier, distance)) = &found {
        debug!(
            "Nearest courier for customer {}: {} at {:.2} km",
            customer.id, courier.name, distance
        );
    }

    found
}

/// All geocoded customers the courier can serve, with their distance,
/// sorted closest first. Empty when the courier has no position.
pub fn customers_in_coverage<'a>(
    courier: &Courier,
    customers: &'a [Customer],
) -> Vec<(&'a Customer, f64)> {
    let Some(from) = courier.position() else {
        return Vec::new();
    };

    let mut in_range: Vec<(&Customer, f64)> = customers
        .iter()
        .filter(|c| can_serve(courier, c))
        .filter_map(|c| {
            c.coordinates()
                .map(|to| (c, geo::haversine_distance(&from, &to)))
        })
        .collect();

    // stable: equidistant customers keep caller order
    in_range.sort_by(|a, b| a.1.total_cmp(&b.1));
    in_range
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn courier_at(lat: f64, lng: f64, radius_km: f64) -> Courier {
        Courier {
            id: Uuid::new_v4(),
            name: "Repartidor".to_string(),
            lat: Some(lat),
            lng: Some(lng),
            location_updated_at: None,
            coverage_radius_km: radius_km,
            coverage_zone: None,
            available_for_deliveries: true,
            is_active: true,
        }
    }

    fn customer_at(lat: f64, lng: f64) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            name: "Cliente".to_string(),
            address: "Calle 1".to_string(),
            city: None,
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    #[test]
    fn test_can_serve_within_radius() {
        // ~1.57 km apart
        let courier = courier_at(4.60, -74.08, 10.0);
        let customer = customer_at(4.61, -74.09);
        assert!(can_serve(&courier, &customer));
    }

    #[test]
    fn test_can_serve_outside_radius() {
        let courier = courier_at(4.60, -74.08, 1.0);
        let customer = customer_at(4.61, -74.09);
        assert!(!can_serve(&courier, &customer));
    }

    #[test]
    fn test_can_serve_at_exactly_the_radius() {
        let mut courier = courier_at(4.60, -74.08, 0.0);
        let customer = customer_at(4.61, -74.09);

        // non-strict boundary: a customer at exactly the radius is served
        courier.coverage_radius_km = courier.distance_to_customer(&customer).unwrap();
        assert!(can_serve(&courier, &customer));
    }

    #[test]
    fn test_can_serve_unavailable_courier_never_serves() {
        let mut courier = courier_at(4.60, -74.08, 10.0);
        courier.available_for_deliveries = false;
        let customer = customer_at(4.61, -74.09);
        assert!(!can_serve(&courier, &customer));
    }

    // Regression: missing GPS on either side skips the distance check and
    // keeps the courier eligible. Legacy behavior; do not extend elsewhere.
    #[test]
    fn test_can_serve_missing_gps_is_permissive() {
        let mut courier = courier_at(4.60, -74.08, 0.001);

        let mut customer = customer_at(4.61, -74.09);
        customer.lng = None;
        assert!(can_serve(&courier, &customer));

        courier.lat = None;
        let customer = customer_at(4.61, -74.09);
        assert!(can_serve(&courier, &customer));
    }

    #[test]
    fn test_nearest_available_courier_picks_closest() {
        let couriers = vec![
            courier_at(4.70, -74.00, 50.0),
            courier_at(4.61, -74.09, 50.0),
            courier_at(4.65, -74.05, 50.0),
        ];
        let customer = customer_at(4.60, -74.08);

        let (winner, distance) = nearest_available_courier(&couriers, &customer).unwrap();
        assert_eq!(winner.id, couriers[1].id);
        assert!((distance - 1.57).abs() < 0.01);
    }

    #[test]
    fn test_nearest_available_courier_at_zero_distance_wins() {
        let couriers = vec![
            courier_at(4.65, -74.05, 50.0),
            courier_at(4.60, -74.08, 50.0), // standing on the destination
        ];
        let customer = customer_at(4.60, -74.08);

        let (winner, distance) = nearest_available_courier(&couriers, &customer).unwrap();
        assert_eq!(winner.id, couriers[1].id);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_nearest_available_courier_skips_ineligible() {
        let mut unavailable = courier_at(4.61, -74.09, 50.0);
        unavailable.available_for_deliveries = false;
        let mut inactive = courier_at(4.61, -74.09, 50.0);
        inactive.is_active = false;
        let mut out_of_range = courier_at(4.61, -74.09, 0.5);
        out_of_range.name = "Fuera de rango".to_string();
        let eligible = courier_at(4.65, -74.05, 50.0);

        let couriers = vec![unavailable, inactive, out_of_range, eligible.clone()];
        let customer = customer_at(4.60, -74.08);

        let (winner, _) = nearest_available_courier(&couriers, &customer).unwrap();
        assert_eq!(winner.id, eligible.id);
    }

    #[test]
    fn test_nearest_available_courier_none_for_unlocated_customer() {
        let couriers = vec![courier_at(4.61, -74.09, 50.0)];
        let mut customer = customer_at(4.60, -74.08);
        customer.lat = None;

        assert!(nearest_available_courier(&couriers, &customer).is_none());
    }

    #[test]
    fn test_customers_in_coverage_sorted_by_distance() {
        let courier = courier_at(4.60, -74.08, 50.0);
        let customers = vec![
            customer_at(4.70, -74.00),
            customer_at(4.61, -74.09),
            customer_at(4.65, -74.05),
        ];

        let in_range = customers_in_coverage(&courier, &customers);
        assert_eq!(in_range.len(), 3);
        assert_eq!(in_range[0].0.id, customers[1].id);
        assert_eq!(in_range[1].0.id, customers[2].id);
        assert_eq!(in_range[2].0.id, customers[0].id);
        assert!(in_range[0].1 <= in_range[1].1 && in_range[1].1 <= in_range[2].1);
    }

    #[test]
    fn test_customers_in_coverage_excludes_out_of_range_and_unlocated() {
        let courier = courier_at(4.60, -74.08, 2.0);
        let mut unlocated = customer_at(4.61, -74.09);
        unlocated.lat = None;
        let customers = vec![
            customer_at(4.70, -74.00), // ~14 km, outside the 2 km radius
            customer_at(4.61, -74.09),
            unlocated, // eligible by the permissive rule but not rankable
        ];

        let in_range = customers_in_coverage(&courier, &customers);
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].0.id, customers[1].id);
    }

    #[test]
    fn test_customers_in_coverage_empty_without_courier_position() {
        let mut courier = courier_at(4.60, -74.08, 50.0);
        courier.lat = None;
        let customers = vec![customer_at(4.61, -74.09)];

        assert!(customers_in_coverage(&courier, &customers).is_empty());
    }
}
