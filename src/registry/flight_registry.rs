use super::registry_error::RegistryError;
use crate::flight::Flight;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The canonical, in-memory collection of tracked flights.
///
/// All operations are non-suspending. Readers always get an owned snapshot, and every
/// bulk write happens under a single write lock, so a `list()` never observes a
/// partially applied batch.
#[derive(Debug, Default)]
pub struct FlightRegistry {
    flights: RwLock<Vec<Flight>>,
}

impl FlightRegistry {
    pub fn new() -> Self { Self::default() }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Flight>>, RegistryError> {
        Ok(self.flights.read()?)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Flight>>, RegistryError> {
        Ok(self.flights.write()?)
    }

    /// Registers a new `Awaiting` flight and returns it.
    pub fn create(&self, flight_number: &str) -> Result<Flight, RegistryError> {
        let flight = Flight::new(flight_number);
        self.write()?.push(flight.clone());
        Ok(flight)
    }

    /// Snapshot of the whole collection in insertion order.
    pub fn list(&self) -> Result<Vec<Flight>, RegistryError> { Ok(self.read()?.clone()) }

    /// Removes the flight with the given id.
    ///
    /// # Returns
    /// `true` if a record was removed, `false` if no flight had that id.
    pub fn delete(&self, id: &str) -> Result<bool, RegistryError> {
        let mut flights = self.write()?;
        let before = flights.len();
        flights.retain(|f| f.id() != id);
        Ok(flights.len() < before)
    }

    /// Swaps the entire collection in one write.
    pub fn replace_all(&self, flights: Vec<Flight>) -> Result<(), RegistryError> {
        *self.write()? = flights;
        Ok(())
    }

    /// Publishes a refresh batch computed from an earlier snapshot, in one write.
    ///
    /// Flights still present get their refreshed record, flights deleted since the
    /// snapshot stay deleted, and flights created since the snapshot are kept as they are.
    ///
    /// # Returns
    /// The collection as published.
    pub fn commit_refresh(&self, refreshed: Vec<Flight>) -> Result<Vec<Flight>, RegistryError> {
        let mut by_id: HashMap<String, Flight> =
            refreshed.into_iter().map(|f| (f.id().to_string(), f)).collect();
        let mut flights = self.write()?;
        let published: Vec<Flight> = flights
            .iter()
            .map(|current| by_id.remove(current.id()).unwrap_or_else(|| current.clone()))
            .collect();
        *flights = published.clone();
        Ok(published)
    }

    pub fn len(&self) -> Result<usize, RegistryError> { Ok(self.read()?.len()) }

    pub fn is_empty(&self) -> Result<bool, RegistryError> { Ok(self.read()?.is_empty()) }

    /// Poisons the collection lock by panicking while holding it.
    #[cfg(test)]
    pub fn poison(&self) {
        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = self.flights.write().unwrap();
                    panic!("poisoning registry lock");
                })
                .join();
        });
    }
}
