use super::{FlightRegistry, RegistryError};
use crate::flight::{Flight, FlightStatus};
use crate::provider::TimingReport;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};

fn departed_at(raw: &str) -> TimingReport {
    let t = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc);
    TimingReport::new(Some(t), None)
}

#[test]
fn test_empty_registry() {
    let registry = FlightRegistry::new();
    assert!(registry.list().unwrap().is_empty());
    assert!(registry.is_empty().unwrap());
    assert!(!registry.delete("any-id").unwrap());
}

#[test]
fn test_create_and_list() {
    let registry = FlightRegistry::new();
    let first = registry.create("AA123").unwrap();
    let second = registry.create("BA456").unwrap();
    assert_eq!(first.status(), FlightStatus::Awaiting);
    assert_ne!(first.id(), second.id());
    assert_eq!(registry.list().unwrap(), vec![first, second]);
}

#[test]
fn test_duplicate_flight_numbers_are_allowed() {
    let registry = FlightRegistry::new();
    let a = registry.create("AA123").unwrap();
    let b = registry.create("AA123").unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(registry.len().unwrap(), 2);
}

#[test]
fn test_delete_only_removes_target() {
    let registry = FlightRegistry::new();
    let a = registry.create("AA123").unwrap();
    let b = registry.create("BB456").unwrap();
    let c = registry.create("CC789").unwrap();
    assert!(registry.delete(b.id()).unwrap());
    assert_eq!(registry.list().unwrap(), vec![a, c]);
    assert!(!registry.delete(b.id()).unwrap());
    assert!(!registry.delete("non-existent-id").unwrap());
    assert_eq!(registry.len().unwrap(), 2);
}

#[test]
fn test_list_is_a_snapshot() {
    let registry = FlightRegistry::new();
    registry.create("AA123").unwrap();
    let snapshot = registry.list().unwrap();
    registry.create("BB456").unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(registry.len().unwrap(), 2);
}

#[test]
fn test_replace_all_swaps_everything() {
    let registry = FlightRegistry::new();
    registry.create("AA123").unwrap();
    let replacement = vec![Flight::new("ZZ1"), Flight::new("ZZ2")];
    registry.replace_all(replacement.clone()).unwrap();
    assert_eq!(registry.list().unwrap(), replacement);
}

#[test]
fn test_commit_refresh_respects_changes_since_snapshot() {
    let registry = FlightRegistry::new();
    let kept = registry.create("AA123").unwrap();
    let deleted = registry.create("BB456").unwrap();
    let snapshot = registry.list().unwrap();

    let refreshed: Vec<Flight> = snapshot
        .iter()
        .map(|f| f.with_timings(&departed_at("2024-01-15T10:00:00Z")))
        .collect();
    assert!(registry.delete(deleted.id()).unwrap());
    let created = registry.create("CC789").unwrap();

    let published = registry.commit_refresh(refreshed).unwrap();
    assert_eq!(published, registry.list().unwrap());
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].id(), kept.id());
    assert_eq!(published[0].status(), FlightStatus::Departed);
    assert_eq!(published[1], created);
    assert!(published.iter().all(|f| f.id() != deleted.id()));
}

#[test]
fn test_poisoned_registry_reports_error() {
    let registry = FlightRegistry::new();
    registry.create("AA123").unwrap();
    registry.poison();
    assert_eq!(registry.list(), Err(RegistryError::Poisoned));
    assert_eq!(registry.create("BB456").map(|_| ()), Err(RegistryError::Poisoned));
    assert_eq!(registry.delete("x"), Err(RegistryError::Poisoned));
    assert_eq!(registry.replace_all(Vec::new()), Err(RegistryError::Poisoned));
}

#[test]
fn test_readers_never_see_partial_batches() {
    let registry = FlightRegistry::new();
    let before: Vec<Flight> = (0..50).map(|i| Flight::new(&format!("B{i}"))).collect();
    let after: Vec<Flight> = before
        .iter()
        .map(|f| f.with_timings(&departed_at("2024-01-01T00:00:00Z")))
        .collect();
    registry.replace_all(before.clone()).unwrap();
    let done = AtomicBool::new(false);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let seen = registry.list().unwrap();
                    assert!(seen == before || seen == after, "observed a mixed batch");
                }
            });
        }
        for i in 0..200 {
            let batch = if i % 2 == 0 { after.clone() } else { before.clone() };
            registry.replace_all(batch).unwrap();
        }
        done.store(true, Ordering::Relaxed);
    });
}
