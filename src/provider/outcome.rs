use chrono::{DateTime, Utc};
use strum_macros::Display;

/// Timing data a provider reports for a flight number. Both fields may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingReport {
    departure_time: Option<DateTime<Utc>>,
    arrival_time: Option<DateTime<Utc>>,
}

impl TimingReport {
    pub fn new(
        departure_time: Option<DateTime<Utc>>,
        arrival_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self { departure_time, arrival_time }
    }

    pub fn empty() -> Self { Self::default() }
    pub fn departure_time(&self) -> Option<DateTime<Utc>> { self.departure_time }
    pub fn arrival_time(&self) -> Option<DateTime<Utc>> { self.arrival_time }
}

/// Answer to a single provider query: either timing data or an expected,
/// human readable failure. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    Success(TimingReport),
    Failure { message: String },
}

impl ProviderOutcome {
    pub fn is_success(&self) -> bool { matches!(self, ProviderOutcome::Success(_)) }
}

/// Unexpected provider error, kept apart from the ordinary `ProviderOutcome::Failure`
/// because the refresh policy reacts to it differently.
#[derive(Debug, Display)]
pub enum ProviderFault {
    /// The named provider's state lock was poisoned by a panicking query.
    StatePoisoned(&'static str),
}

impl std::error::Error for ProviderFault {}
