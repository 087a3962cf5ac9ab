use crate::warn;
use std::env;
use std::time::Duration;

const REFRESH_SECS_VAR: &str = "FLIGHT_TRACKER_REFRESH_SECS";
const PROVIDER_TIMEOUT_MS_VAR: &str = "FLIGHT_TRACKER_PROVIDER_TIMEOUT_MS";
const SEED_FLIGHTS_VAR: &str = "FLIGHT_TRACKER_SEED_FLIGHTS";
const RNG_SEED_VAR: &str = "FLIGHT_TRACKER_RNG_SEED";

/// Runtime settings of the tracker process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Period between two background refresh passes.
    refresh_interval: Duration,
    /// Upper bound for a single provider call.
    provider_timeout: Duration,
    /// Flight numbers registered at startup.
    seed_flights: Vec<String>,
    /// Seed for reproducible provider behaviour, thread randomness if absent.
    rng_seed: Option<u64>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
            provider_timeout: Self::DEFAULT_PROVIDER_TIMEOUT,
            seed_flights: Vec::new(),
            rng_seed: None,
        }
    }
}

impl TrackerConfig {
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);
    pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|key| env::var(key).ok()) }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Missing keys take their default, unparsable ones too, with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let defaults = Self::default();
        let refresh_interval = parse_positive(&lookup, REFRESH_SECS_VAR)
            .map_or(defaults.refresh_interval, Duration::from_secs);
        let provider_timeout = parse_positive(&lookup, PROVIDER_TIMEOUT_MS_VAR)
            .map_or(defaults.provider_timeout, Duration::from_millis);
        let seed_flights = lookup(SEED_FLIGHTS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let rng_seed = lookup(RNG_SEED_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("Ignoring {RNG_SEED_VAR}={raw:?}, not a number.");
                None
            }
        });
        Self { refresh_interval, provider_timeout, seed_flights, rng_seed }
    }

    pub fn refresh_interval(&self) -> Duration { self.refresh_interval }
    pub fn provider_timeout(&self) -> Duration { self.provider_timeout }
    pub fn seed_flights(&self) -> &[String] { &self.seed_flights }
    pub fn rng_seed(&self) -> Option<u64> { self.rng_seed }
}

/// Reads a strictly positive integer, `None` if the key is missing or the value unusable.
fn parse_positive<F>(lookup: &F, key: &str) -> Option<u64>
where F: Fn(&str) -> Option<String> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            warn!("Ignoring {key}={raw:?}, using the default.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> TrackerConfig {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        TrackerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.provider_timeout(), Duration::from_secs(5));
        assert!(config.seed_flights().is_empty());
        assert_eq!(config.rng_seed(), None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (REFRESH_SECS_VAR, "15"),
            (PROVIDER_TIMEOUT_MS_VAR, " 2500 "),
            (SEED_FLIGHTS_VAR, "AA123, BB456,,CC789 "),
            (RNG_SEED_VAR, "42"),
        ]);
        assert_eq!(config.refresh_interval(), Duration::from_secs(15));
        assert_eq!(config.provider_timeout(), Duration::from_millis(2500));
        assert_eq!(config.seed_flights(), ["AA123", "BB456", "CC789"]);
        assert_eq!(config.rng_seed(), Some(42));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            (REFRESH_SECS_VAR, "soon"),
            (PROVIDER_TIMEOUT_MS_VAR, "0"),
            (RNG_SEED_VAR, "-1"),
        ]);
        assert_eq!(config, TrackerConfig::default());
    }
}
