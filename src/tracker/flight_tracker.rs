use super::tracker_error::TrackerError;
use crate::flight::Flight;
use crate::refresh::{RefreshOrchestrator, RefreshSummary};
use crate::registry::FlightRegistry;
use crate::{event, info};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Liveness answer, mirrors what a health check endpoint reports.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HealthReport {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

impl HealthReport {
    pub fn status(&self) -> &'static str { self.status }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}

/// Ties the flight registry to the refresh engine.
///
/// This is the surface the routing layer calls into: it returns plain data and leaves
/// the mapping to status codes to the caller.
pub struct FlightTracker {
    registry: FlightRegistry,
    orchestrator: RefreshOrchestrator,
    /// Held for a whole refresh pass so batches commit in snapshot order.
    refresh_gate: Mutex<()>,
}

impl FlightTracker {
    pub fn new(registry: FlightRegistry, orchestrator: RefreshOrchestrator) -> Self {
        Self { registry, orchestrator, refresh_gate: Mutex::new(()) }
    }

    pub fn create(&self, flight_number: &str) -> Result<Flight, TrackerError> {
        let flight = self.registry.create(flight_number)?;
        info!("Tracking {} as {}.", flight.flight_number(), flight.id());
        Ok(flight)
    }

    pub fn list(&self) -> Result<Vec<Flight>, TrackerError> { Ok(self.registry.list()?) }

    /// Stops tracking a flight. An unknown id yields `Ok(false)`.
    pub fn delete(&self, id: &str) -> Result<bool, TrackerError> {
        let removed = self.registry.delete(id)?;
        if removed {
            info!("Stopped tracking {id}.");
        } else {
            event!("Delete for unknown flight id {id} ignored.");
        }
        Ok(removed)
    }

    /// Runs one refresh pass over the whole registry and publishes it atomically.
    ///
    /// The only error is failing to enumerate or write the registry; provider trouble
    /// leaves the affected flights unchanged. Passes never overlap: a second caller waits
    /// until the running pass has committed and then works on a fresh snapshot.
    pub async fn refresh_all(&self) -> Result<Vec<Flight>, TrackerError> {
        Ok(self.refresh_all_with_summary().await?.0)
    }

    pub async fn refresh_all_with_summary(
        &self,
    ) -> Result<(Vec<Flight>, RefreshSummary), TrackerError> {
        let _pass = self.refresh_gate.lock().await;
        let snapshot = self.registry.list()?;
        let (refreshed, summary) = self.orchestrator.refresh_all_with_summary(snapshot).await;
        let published = self.registry.commit_refresh(refreshed)?;
        Ok((published, summary))
    }

    pub fn health(&self) -> HealthReport { HealthReport { status: "OK", timestamp: Utc::now() } }
}
