//! Transport agnostic entry point used by the outer layers.

mod flight_tracker;
mod tracker_error;

pub use flight_tracker::{FlightTracker, HealthReport};
pub use tracker_error::TrackerError;
