mod flight_registry;
mod registry_error;

pub use flight_registry::FlightRegistry;
pub use registry_error::RegistryError;

#[cfg(test)]
mod tests;
