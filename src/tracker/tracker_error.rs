use crate::registry::RegistryError;
use strum_macros::Display;

/// Errors surfaced by the `FlightTracker` facade.
///
/// Provider problems never show up here, they are absorbed per flight during a refresh.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum TrackerError {
    Registry(RegistryError),
}

impl std::error::Error for TrackerError {}

impl From<RegistryError> for TrackerError {
    fn from(value: RegistryError) -> Self { TrackerError::Registry(value) }
}
