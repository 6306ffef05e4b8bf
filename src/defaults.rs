//! Platform-wide routing defaults.

/// Average courier speed in km/h used for travel time estimates.
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Service time spent at each delivery stop, in minutes.
pub const STOP_SERVICE_MINUTES: f64 = 10.0;

/// Coverage radius assigned to couriers that have not declared one, in km.
pub const DEFAULT_COVERAGE_RADIUS_KM: f64 = 10.0;
