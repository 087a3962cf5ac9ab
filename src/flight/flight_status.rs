use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter};

/// Lifecycle marker of a flight, shared by registry records and provider state.
///
/// The variants are ordered, so `Awaiting < Departed < Arrived` holds and
/// monotonic progression can be checked with plain comparisons.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Hash,
    Display,
    EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Awaiting,
    Departed,
    Arrived,
}

impl FlightStatus {
    /// Derives the status from the reported timing data.
    ///
    /// Both timestamps give `Arrived`, a departure time alone gives `Departed`, and no
    /// timing data at all means the flight is still `Awaiting`. Providers always report a
    /// departure before an arrival; should one report an arrival alone, it still counts
    /// as `Arrived`.
    pub fn derive(
        departure_time: Option<DateTime<Utc>>,
        arrival_time: Option<DateTime<Utc>>,
    ) -> Self {
        match (departure_time, arrival_time) {
            (_, Some(_)) => FlightStatus::Arrived,
            (Some(_), None) => FlightStatus::Departed,
            (None, None) => FlightStatus::Awaiting,
        }
    }
}
