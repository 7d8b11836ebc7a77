//! HTTP implementations of the collaborator traits.
//!
//! The engine itself is transport-agnostic; these adapters satisfy the
//! repository, identity, and aspect seams against a JSON backend.

pub mod aspects;
pub mod identity;
pub mod profile_repo;

pub use aspects::{HttpAspectWriter, HttpPaymentStatusSource};
pub use identity::HttpIdentityProvider;
pub use profile_repo::HttpProfileRepository;
