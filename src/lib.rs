//! Reyes routing core - route optimization and courier dispatch
//!
//! Pure, synchronous building blocks for the delivery side of the Reyes
//! distribution platform: Haversine distances, courier eligibility and
//! nearest-courier lookup, and nearest-neighbor route construction.
//!
//! The crate performs no I/O and never mutates its inputs. Callers load
//! couriers, customers, warehouses and deliveries, call in, and persist
//! or display whatever comes back.

pub mod defaults;
pub mod services;
pub mod types;
