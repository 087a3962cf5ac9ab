//! Flight status tracking engine.
//!
//! A [`registry::FlightRegistry`] holds the tracked flights, two
//! [`provider::ProviderSimulator`]s stand in for external status providers, and the
//! [`refresh::RefreshOrchestrator`] reconciles the whole registry against them with a
//! primary/fallback policy. [`tracker::FlightTracker`] bundles all of it behind the
//! operations the outer request layer calls.
#![allow(clippy::similar_names, clippy::module_name_repetitions)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod logger;

pub mod config;
pub mod flight;
pub mod provider;
pub mod refresh;
pub mod registry;
pub mod tracker;
