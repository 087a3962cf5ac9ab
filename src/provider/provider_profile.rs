use chrono::TimeDelta;
use std::time::Duration;

/// Wording a provider uses when it cannot answer a first contact query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureWording {
    NotFound,
    TemporarilyUnavailable,
}

/// Behavioural constants of one simulated provider.
///
/// Both providers run the identical algorithm; only these numbers differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderProfile {
    /// Display name, prefixed to every failure message.
    name: &'static str,
    /// Lower bound of the simulated network latency.
    latency_min: Duration,
    /// Width of the latency range on top of `latency_min`.
    latency_span: Duration,
    /// Chance that a query for an unseen flight number fails.
    first_contact_failure_p: f64,
    /// Minimum time in `Awaiting` before a departure may be rolled.
    departure_gate: TimeDelta,
    /// Chance of departing once the gate is open.
    departure_p: f64,
    /// How far back a synthetic departure time may lie.
    departure_window: TimeDelta,
    /// Minimum time in `Departed` before an arrival may be rolled.
    arrival_gate: TimeDelta,
    /// Chance of arriving once the gate is open.
    arrival_p: f64,
    /// How far back a synthetic arrival time may lie.
    arrival_window: TimeDelta,
    failure_wording: FailureWording,
}

impl ProviderProfile {
    /// Primary provider.
    pub const FLIGHT_AWARE: ProviderProfile = ProviderProfile {
        name: "FlightAware",
        latency_min: Duration::from_millis(500),
        latency_span: Duration::from_millis(1000),
        first_contact_failure_p: 0.1,
        departure_gate: TimeDelta::seconds(30),
        departure_p: 0.5,
        departure_window: TimeDelta::minutes(30),
        arrival_gate: TimeDelta::seconds(60),
        arrival_p: 0.3,
        arrival_window: TimeDelta::minutes(15),
        failure_wording: FailureWording::NotFound,
    };

    /// Secondary provider, consulted as fallback.
    pub const FLIGHT_STATS: ProviderProfile = ProviderProfile {
        name: "FlightStats",
        latency_min: Duration::from_millis(300),
        latency_span: Duration::from_millis(800),
        first_contact_failure_p: 0.15,
        departure_gate: TimeDelta::seconds(45),
        departure_p: 0.4,
        departure_window: TimeDelta::minutes(40),
        arrival_gate: TimeDelta::seconds(90),
        arrival_p: 0.25,
        arrival_window: TimeDelta::minutes(15),
        failure_wording: FailureWording::TemporarilyUnavailable,
    };

    pub fn name(&self) -> &'static str { self.name }
    pub fn first_contact_failure_p(&self) -> f64 { self.first_contact_failure_p }
    pub fn departure_gate(&self) -> TimeDelta { self.departure_gate }
    pub fn departure_p(&self) -> f64 { self.departure_p }
    pub fn departure_window(&self) -> TimeDelta { self.departure_window }
    pub fn arrival_gate(&self) -> TimeDelta { self.arrival_gate }
    pub fn arrival_p(&self) -> f64 { self.arrival_p }
    pub fn arrival_window(&self) -> TimeDelta { self.arrival_window }

    /// Latency for a unit draw `r`, in `[latency_min, latency_min + latency_span)`.
    pub fn latency(&self, r: f64) -> Duration {
        self.latency_min + self.latency_span.mul_f64(r.clamp(0.0, 1.0))
    }

    /// Upper bound of the latency range.
    pub fn max_latency(&self) -> Duration { self.latency_min + self.latency_span }

    pub fn failure_message(&self, flight_number: &str) -> String {
        match self.failure_wording {
            FailureWording::NotFound => {
                format!("{}: Unable to find flight {flight_number}", self.name)
            }
            FailureWording::TemporarilyUnavailable => {
                format!("{}: Flight {flight_number} data temporarily unavailable", self.name)
            }
        }
    }
}
