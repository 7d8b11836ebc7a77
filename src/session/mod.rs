//! Session state and step navigation.

pub mod model;
pub mod navigation;

pub use model::{OnboardingSession, ResumeHint};
pub use navigation::NavigationController;
