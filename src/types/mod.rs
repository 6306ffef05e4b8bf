//! Type definitions

pub mod courier;
pub mod customer;
pub mod delivery;
pub mod route;
pub mod warehouse;

pub use courier::*;
pub use customer::*;
pub use delivery::*;
pub use route::*;
pub use warehouse::*;
