use super::{
    outcome::TimingReport, provider_profile::ProviderProfile, random_source::RandomSource,
};
use crate::flight::FlightStatus;
use chrono::{DateTime, TimeDelta, Utc};

/// A provider's private view of one flight number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ProviderFlightState {
    phase: FlightStatus,
    departure_time: Option<DateTime<Utc>>,
    arrival_time: Option<DateTime<Utc>>,
    /// Instant of the last phase change, gates the next one.
    last_transition_at: DateTime<Utc>,
}

impl ProviderFlightState {
    /// First contact: every flight number starts out `Awaiting`.
    pub(super) fn new(now: DateTime<Utc>) -> Self {
        Self {
            phase: FlightStatus::Awaiting,
            departure_time: None,
            arrival_time: None,
            last_transition_at: now,
        }
    }

    pub(super) fn phase(&self) -> FlightStatus { self.phase }

    pub(super) fn report(&self) -> TimingReport {
        TimingReport::new(self.departure_time, self.arrival_time)
    }

    /// Rolls for the next phase if its time gate is open.
    ///
    /// At most one step is taken per call and the phase never moves backwards.
    /// One draw is consumed for the roll, and one more for the synthetic timestamp
    /// if the roll succeeds.
    ///
    /// # Returns
    /// `true` if the phase changed.
    pub(super) fn advance(
        &mut self,
        now: DateTime<Utc>,
        profile: &ProviderProfile,
        random: &dyn RandomSource,
    ) -> bool {
        let elapsed = now - self.last_transition_at;
        match self.phase {
            FlightStatus::Awaiting if elapsed > profile.departure_gate() => {
                if random.next_unit() >= profile.departure_p() {
                    return false;
                }
                self.phase = FlightStatus::Departed;
                self.departure_time =
                    Some(now - Self::window_offset(profile.departure_window(), random));
                self.last_transition_at = now;
                true
            }
            FlightStatus::Departed if elapsed > profile.arrival_gate() => {
                if random.next_unit() >= profile.arrival_p() {
                    return false;
                }
                self.phase = FlightStatus::Arrived;
                self.arrival_time =
                    Some(now - Self::window_offset(profile.arrival_window(), random));
                self.last_transition_at = now;
                true
            }
            _ => false,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn window_offset(window: TimeDelta, random: &dyn RandomSource) -> TimeDelta {
        let ms = window.num_milliseconds() as f64 * random.next_unit().clamp(0.0, 1.0);
        TimeDelta::milliseconds(ms as i64)
    }
}
