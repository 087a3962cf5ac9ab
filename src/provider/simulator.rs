use super::{
    FlightStatusProvider,
    clock::Clock,
    outcome::{ProviderFault, ProviderOutcome, TimingReport},
    provider_profile::ProviderProfile,
    provider_state::ProviderFlightState,
    random_source::RandomSource,
};
use crate::{event, prov};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type StateEntry = Arc<Mutex<ProviderFlightState>>;

/// Result of the map lookup at the start of a query.
enum Contact {
    /// The number is already tracked; progression runs on this entry.
    Known(StateEntry),
    /// First contact, answered without progression.
    First(ProviderOutcome),
}

/// A simulated flight status provider with its own memory of every flight number it has seen.
///
/// The outer map lock is only held to look up or insert an entry, so queries for
/// different flight numbers never wait on each other's progression. Queries for the
/// same number serialize on the entry lock.
pub struct ProviderSimulator {
    profile: ProviderProfile,
    states: Mutex<HashMap<String, StateEntry>>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl ProviderSimulator {
    /// Creates a simulator with an empty state map.
    ///
    /// # Arguments
    /// * `profile` – The provider constants, e.g. `ProviderProfile::FLIGHT_AWARE`.
    /// * `clock` – Time source for the progression gates.
    /// * `random` – Draws for latency, failure and progression rolls.
    pub fn new(
        profile: ProviderProfile,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self { profile, states: Mutex::new(HashMap::new()), clock, random }
    }

    /// Number of flight numbers this provider remembers.
    pub fn known_flights(&self) -> usize { self.states.lock().map_or(0, |s| s.len()) }

    /// Looks up the state entry, registering unseen numbers unless the first contact roll fails.
    ///
    /// A freshly registered entry answers with empty timings and is not advanced on
    /// the same call. A failed first contact leaves no trace in the map.
    fn lookup_or_register(&self, flight_number: &str) -> Result<Contact, ProviderFault> {
        let mut states =
            self.states.lock().map_err(|_| ProviderFault::StatePoisoned(self.profile.name()))?;
        if let Some(entry) = states.get(flight_number) {
            return Ok(Contact::Known(Arc::clone(entry)));
        }
        if self.random.next_unit() < self.profile.first_contact_failure_p() {
            let message = self.profile.failure_message(flight_number);
            prov!("{message}");
            return Ok(Contact::First(ProviderOutcome::Failure { message }));
        }
        let state = ProviderFlightState::new(self.clock.now());
        states.insert(flight_number.to_string(), Arc::new(Mutex::new(state)));
        event!("{} now tracks {flight_number}.", self.profile.name());
        Ok(Contact::First(ProviderOutcome::Success(TimingReport::empty())))
    }

    fn step(&self, flight_number: &str, entry: &StateEntry) -> Result<TimingReport, ProviderFault> {
        let mut state =
            entry.lock().map_err(|_| ProviderFault::StatePoisoned(self.profile.name()))?;
        if state.advance(self.clock.now(), &self.profile, self.random.as_ref()) {
            prov!("{} reports {flight_number} as {}.", self.profile.name(), state.phase());
        }
        Ok(state.report())
    }
}

#[async_trait]
impl FlightStatusProvider for ProviderSimulator {
    fn name(&self) -> &'static str { self.profile.name() }

    async fn query(&self, flight_number: &str) -> Result<ProviderOutcome, ProviderFault> {
        tokio::time::sleep(self.profile.latency(self.random.next_unit())).await;
        match self.lookup_or_register(flight_number)? {
            Contact::Known(entry) => Ok(ProviderOutcome::Success(self.step(flight_number, &entry)?)),
            Contact::First(outcome) => Ok(outcome),
        }
    }
}
