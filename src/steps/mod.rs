//! Step catalogue, completion predicates, and forward-navigation validators.

pub mod completion;
pub mod registry;
pub mod validate;

pub use completion::{is_complete, is_complete_by_id};
pub use registry::{StepDefinition, StepId, StepRegistry};
pub use validate::validate_step;
