use super::flight_status::FlightStatus;
use crate::provider::TimingReport;
use chrono::{DateTime, Utc};
use std::fmt;

/// A tracked flight as stored in the registry and handed across the engine boundary.
///
/// The JSON form is
/// `{id, flightNumber, status, actualDepartureTime, actualArrivalTime}`
/// with RFC 3339 UTC timestamps or `null`. Decoding rejects a `status` that does not
/// match the timestamps.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FlightRepr")]
pub struct Flight {
    /// Opaque identifier, assigned once at creation.
    id: String,
    /// Caller supplied flight number, used as the provider lookup key.
    flight_number: String,
    /// Status derived from the two timestamps below.
    status: FlightStatus,
    /// Departure time as last reported by a provider.
    actual_departure_time: Option<DateTime<Utc>>,
    /// Arrival time as last reported by a provider.
    actual_arrival_time: Option<DateTime<Utc>>,
}

impl Flight {
    /// Creates a fresh `Awaiting` flight with a new random id and no timing data.
    pub fn new(flight_number: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            flight_number: flight_number.to_string(),
            status: FlightStatus::Awaiting,
            actual_departure_time: None,
            actual_arrival_time: None,
        }
    }

    /// Rebuilds a flight from already known parts, deriving the status from the timestamps.
    pub fn restore(
        id: &str,
        flight_number: &str,
        actual_departure_time: Option<DateTime<Utc>>,
        actual_arrival_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.to_string(),
            flight_number: flight_number.to_string(),
            status: FlightStatus::derive(actual_departure_time, actual_arrival_time),
            actual_departure_time,
            actual_arrival_time,
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn flight_number(&self) -> &str { &self.flight_number }
    pub fn status(&self) -> FlightStatus { self.status }
    pub fn actual_departure_time(&self) -> Option<DateTime<Utc>> { self.actual_departure_time }
    pub fn actual_arrival_time(&self) -> Option<DateTime<Utc>> { self.actual_arrival_time }

    /// Returns a copy of this flight carrying the provider's timestamps verbatim.
    ///
    /// Identity fields are kept and the status is re-derived.
    #[must_use]
    pub fn with_timings(&self, report: &TimingReport) -> Self {
        Self {
            id: self.id.clone(),
            flight_number: self.flight_number.clone(),
            status: FlightStatus::derive(report.departure_time(), report.arrival_time()),
            actual_departure_time: report.departure_time(),
            actual_arrival_time: report.arrival_time(),
        }
    }
}

/// Wire form of a `Flight` before its status has been checked.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRepr {
    id: String,
    flight_number: String,
    status: FlightStatus,
    actual_departure_time: Option<DateTime<Utc>>,
    actual_arrival_time: Option<DateTime<Utc>>,
}

/// A decoded flight whose parts contradict each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightDecodeError {
    StatusMismatch { claimed: FlightStatus, derived: FlightStatus },
}

impl fmt::Display for FlightDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightDecodeError::StatusMismatch { claimed, derived } => {
                write!(f, "status {claimed} contradicts timing data, which gives {derived}")
            }
        }
    }
}

impl std::error::Error for FlightDecodeError {}

impl TryFrom<FlightRepr> for Flight {
    type Error = FlightDecodeError;

    fn try_from(repr: FlightRepr) -> Result<Self, Self::Error> {
        let flight = Flight::restore(
            &repr.id,
            &repr.flight_number,
            repr.actual_departure_time,
            repr.actual_arrival_time,
        );
        if flight.status != repr.status {
            return Err(FlightDecodeError::StatusMismatch {
                claimed: repr.status,
                derived: flight.status,
            });
        }
        Ok(flight)
    }
}
