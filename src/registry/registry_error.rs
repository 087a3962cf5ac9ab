use strum_macros::Display;

/// Failure to access the flight collection itself.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum RegistryError {
    /// A writer panicked while holding the collection lock.
    Poisoned,
}

impl std::error::Error for RegistryError {}

impl<T> From<std::sync::PoisonError<T>> for RegistryError {
    fn from(_: std::sync::PoisonError<T>) -> Self { RegistryError::Poisoned }
}
