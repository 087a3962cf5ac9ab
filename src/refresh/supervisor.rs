use crate::flight::Flight;
use crate::logger::events_enabled;
use crate::tracker::FlightTracker;
use crate::{error, event, info, log, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Drives periodic refresh passes over the tracker until cancelled.
pub struct RefreshSupervisor {
    tracker: Arc<FlightTracker>,
    period: Duration,
}

impl RefreshSupervisor {
    pub fn new(tracker: Arc<FlightTracker>, period: Duration) -> Self { Self { tracker, period } }

    /// Runs refresh passes every `period`, the first one immediately.
    ///
    /// A pass that fails is logged and the loop keeps going. Passes never overlap:
    /// a tick that falls due while a pass is still running is delayed.
    ///
    /// # Returns
    /// The number of completed passes once `c_tok` is cancelled.
    pub async fn run(&self, c_tok: CancellationToken) -> usize {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut passes = 0;
        loop {
            tokio::select! {
                () = c_tok.cancelled() => {
                    info!("Refresh supervisor stopping after {passes} passes.");
                    return passes;
                }
                _ = ticker.tick() => {
                    self.pass(passes).await;
                    passes += 1;
                }
            }
        }
    }

    async fn pass(&self, n: usize) {
        match self.tracker.refresh_all_with_summary().await {
            Ok((flights, summary)) => {
                log!("Refresh pass {n} done, {summary}.");
                for flight in &flights {
                    event!("{} ({}) is {}.", flight.flight_number(), flight.id(), flight.status());
                }
                if let Some(json) = snapshot_event(n, &flights, events_enabled()) {
                    event!("Published snapshot: {json}");
                }
            }
            Err(e) => error!("Refresh pass {n} failed: {e:?}"),
        }
    }
}

/// JSON body of the per pass snapshot event, only built when events are printed.
pub(super) fn snapshot_event(n: usize, flights: &[Flight], enabled: bool) -> Option<String> {
    if !enabled {
        return None;
    }
    match serde_json::to_string(flights) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Snapshot of refresh pass {n} could not be serialized: {e}");
            None
        }
    }
}
