//! Facility electric load estimator with solar PV and battery sizing.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod equipment;
pub mod io;
pub mod irradiance;
pub mod load;
pub mod report;
pub mod session;
pub mod sizing;
