use super::{FlightStatusProvider, ProviderFault, ProviderOutcome, TimingReport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted answer of a `MockProvider`.
#[derive(Debug, Clone)]
pub enum Scripted {
    Answer(TimingReport),
    Fail,
    Fault,
    Panic,
    Hang,
}

/// Provider double answering from a per flight number script.
pub struct MockProvider {
    name: &'static str,
    latency: Duration,
    script: HashMap<String, Scripted>,
    default: Scripted,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(name: &'static str, default: Scripted) -> Self {
        Self {
            name,
            latency: Duration::from_millis(100),
            script: HashMap::new(),
            default,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, flight_number: &str, answer: Scripted) -> Self {
        self.script.insert(flight_number.to_string(), answer);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

#[async_trait]
impl FlightStatusProvider for MockProvider {
    fn name(&self) -> &'static str { self.name }

    async fn query(&self, flight_number: &str) -> Result<ProviderOutcome, ProviderFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        match self.script.get(flight_number).unwrap_or(&self.default).clone() {
            Scripted::Answer(report) => Ok(ProviderOutcome::Success(report)),
            Scripted::Fail => Ok(ProviderOutcome::Failure {
                message: format!("{}: Unable to find flight {flight_number}", self.name),
            }),
            Scripted::Fault => Err(ProviderFault::StatePoisoned(self.name)),
            Scripted::Panic => panic!("{} blew up", self.name),
            Scripted::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(ProviderOutcome::Success(TimingReport::empty()))
            }
        }
    }
}
