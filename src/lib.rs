//! Vendor Onboard — onboarding step engine for a two-sided marketplace.
//!
//! A vendor supplies identity, business details, location, services,
//! availability, media, payment linkage, and policies across an ordered
//! sequence of steps before the profile counts as complete. Step completion
//! is always derived from the draft data, never stored; forward navigation
//! is validator-gated; a partially completed workflow can be resumed from a
//! stable step identifier; and the local draft reconciles against a remote
//! profile that may or may not already exist.

pub mod config;
pub mod draft;
pub mod error;
pub mod http;
pub mod identity;
pub mod manager;
pub mod progress;
pub mod reconcile;
pub mod routes;
pub mod session;
pub mod steps;

pub use error::{Error, Result};
pub use manager::{OnboardingManager, OnboardingStatus};
