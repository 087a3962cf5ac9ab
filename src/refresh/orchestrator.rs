use super::refresh_summary::{RefreshSource, RefreshSummary};
use crate::flight::Flight;
use crate::provider::{FlightStatusProvider, ProviderFault, ProviderOutcome};
use crate::{error, event, prov};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

/// Reconciles a batch of flights against a primary and a fallback provider.
///
/// Every flight is resolved in its own task. Each task returns its own result and the
/// batch is only assembled after all of them have finished, so callers never see a
/// partially refreshed batch. Provider failures never escape: a flight that cannot be
/// refreshed comes back exactly as it went in.
#[derive(Clone)]
pub struct RefreshOrchestrator {
    primary: Arc<dyn FlightStatusProvider>,
    secondary: Arc<dyn FlightStatusProvider>,
    /// Upper bound for a single provider call; hitting it counts as a failure outcome.
    call_timeout: Duration,
}

impl RefreshOrchestrator {
    pub fn new(
        primary: Arc<dyn FlightStatusProvider>,
        secondary: Arc<dyn FlightStatusProvider>,
        call_timeout: Duration,
    ) -> Self {
        Self { primary, secondary, call_timeout }
    }

    /// Refreshes every flight concurrently and returns the batch in input order.
    pub async fn refresh_all(&self, flights: Vec<Flight>) -> Vec<Flight> {
        self.refresh_all_with_summary(flights).await.0
    }

    /// Like `refresh_all`, additionally reporting which path each flight took.
    pub async fn refresh_all_with_summary(
        &self,
        flights: Vec<Flight>,
    ) -> (Vec<Flight>, RefreshSummary) {
        let handles: Vec<_> = flights
            .iter()
            .cloned()
            .map(|flight| {
                let orchestrator = self.clone();
                tokio::spawn(async move { orchestrator.resolve(flight).await })
            })
            .collect();

        let joined = join_all(handles).await;

        let mut summary = RefreshSummary::default();
        let refreshed = flights
            .into_iter()
            .zip(joined)
            .map(|(original, result)| {
                let (flight, source) = result.unwrap_or_else(|join_err| {
                    error!(
                        "Refresh task for {} aborted: {join_err}. Keeping prior data.",
                        original.flight_number()
                    );
                    (original, RefreshSource::Unchanged)
                });
                summary.record(source);
                flight
            })
            .collect();
        (refreshed, summary)
    }

    /// Applies the primary/fallback policy to one flight.
    ///
    /// A primary fault skips the fallback entirely; only an ordinary primary failure
    /// (including a timeout) consults the secondary provider.
    async fn resolve(&self, flight: Flight) -> (Flight, RefreshSource) {
        let number = flight.flight_number().to_string();
        match self.ask(self.primary.as_ref(), &number).await {
            Ok(ProviderOutcome::Success(report)) => {
                event!("{} answered for {number}.", self.primary.name());
                (flight.with_timings(&report), RefreshSource::Primary)
            }
            Ok(ProviderOutcome::Failure { message }) => {
                prov!("{message}. Falling back to {}.", self.secondary.name());
                match self.ask(self.secondary.as_ref(), &number).await {
                    Ok(ProviderOutcome::Success(report)) => {
                        (flight.with_timings(&report), RefreshSource::Fallback)
                    }
                    Ok(ProviderOutcome::Failure { message }) => {
                        prov!("{message}. Keeping prior data for {number}.");
                        (flight, RefreshSource::Unchanged)
                    }
                    Err(fault) => {
                        log_fault(self.secondary.as_ref(), &number, &fault);
                        (flight, RefreshSource::Unchanged)
                    }
                }
            }
            Err(fault) => {
                log_fault(self.primary.as_ref(), &number, &fault);
                (flight, RefreshSource::Unchanged)
            }
        }
    }

    async fn ask(
        &self,
        provider: &dyn FlightStatusProvider,
        flight_number: &str,
    ) -> Result<ProviderOutcome, ProviderFault> {
        match tokio::time::timeout(self.call_timeout, provider.query(flight_number)).await {
            Ok(result) => result,
            Err(_) => Ok(ProviderOutcome::Failure {
                message: format!(
                    "{}: Query for flight {flight_number} timed out after {}ms",
                    provider.name(),
                    self.call_timeout.as_millis()
                ),
            }),
        }
    }
}

fn log_fault(provider: &dyn FlightStatusProvider, flight_number: &str, fault: &ProviderFault) {
    error!("{} faulted for {flight_number}: {fault:?}. Keeping prior data.", provider.name());
}
