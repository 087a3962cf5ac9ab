//! Simulated flight status providers.
//!
//! Each provider keeps its own memory of the flight numbers it was asked about and
//! lets them progress `AWAITING -> DEPARTED -> ARRIVED` on a time gated, probabilistic
//! schedule. Latency, first contact failures and progression are all driven by an
//! injectable `RandomSource` and `Clock`.

mod clock;
#[cfg(test)]
mod mock_provider;
mod outcome;
mod provider_profile;
mod provider_state;
mod random_source;
mod simulator;

use async_trait::async_trait;

pub use clock::{Clock, SystemClock};
pub use outcome::{ProviderFault, ProviderOutcome, TimingReport};
pub use provider_profile::ProviderProfile;
pub use random_source::{RandomSource, SeededRandom, ThreadRandom};
pub use simulator::ProviderSimulator;

#[cfg(test)]
pub use clock::ManualClock;
#[cfg(test)]
pub use mock_provider::{MockProvider, Scripted};
#[cfg(test)]
pub use random_source::{FixedRandom, ScriptedRandom};

/// Anything that can answer "what is the current timing of this flight number".
///
/// An ordinary "cannot answer" is a `ProviderOutcome::Failure`. `Err` is reserved for
/// unexpected faults, which the refresh policy handles more conservatively.
#[async_trait]
pub trait FlightStatusProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn query(&self, flight_number: &str) -> Result<ProviderOutcome, ProviderFault>;
}
