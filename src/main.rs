use flight_tracker::{
    config::TrackerConfig,
    fatal, info,
    provider::{
        Clock, FlightStatusProvider, ProviderProfile, ProviderSimulator, RandomSource,
        SeededRandom, SystemClock, ThreadRandom,
    },
    refresh::{RefreshOrchestrator, RefreshSupervisor},
    registry::FlightRegistry,
    tracker::FlightTracker,
    warn,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = TrackerConfig::from_env();
    info!(
        "Starting flight tracker, refreshing every {}s with a {}ms provider timeout.",
        config.refresh_interval().as_secs(),
        config.provider_timeout().as_millis()
    );
    let tracker = Arc::new(init(&config));

    for flight_number in config.seed_flights() {
        if let Err(e) = tracker.create(flight_number) {
            fatal!("Could not register seed flight {flight_number}: {e:?}");
        }
    }

    let c_tok = CancellationToken::new();
    let c_tok_clone = c_tok.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl-C handler unavailable: {e}");
            return;
        }
        info!("Ctrl-C received, shutting down.");
        c_tok_clone.cancel();
    });

    let supervisor = RefreshSupervisor::new(Arc::clone(&tracker), config.refresh_interval());
    let passes = supervisor.run(c_tok).await;
    info!("Flight tracker finished after {passes} refresh passes.");
}

fn init(config: &TrackerConfig) -> FlightTracker {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let (primary_rand, secondary_rand): (Arc<dyn RandomSource>, Arc<dyn RandomSource>) =
        match config.rng_seed() {
            Some(seed) => (
                Arc::new(SeededRandom::new(seed)),
                Arc::new(SeededRandom::new(seed.wrapping_add(1))),
            ),
            None => (Arc::new(ThreadRandom), Arc::new(ThreadRandom)),
        };
    let primary: Arc<dyn FlightStatusProvider> = Arc::new(ProviderSimulator::new(
        ProviderProfile::FLIGHT_AWARE,
        Arc::clone(&clock),
        primary_rand,
    ));
    let secondary: Arc<dyn FlightStatusProvider> =
        Arc::new(ProviderSimulator::new(ProviderProfile::FLIGHT_STATS, clock, secondary_rand));
    info!("Primary provider {}, fallback {}.", primary.name(), secondary.name());
    let orchestrator = RefreshOrchestrator::new(primary, secondary, config.provider_timeout());
    FlightTracker::new(FlightRegistry::new(), orchestrator)
}
