//! Remote reconciliation — collaborator seams, wire mapping, and the
//! load/save service.

pub mod aspects;
pub mod service;
pub mod snapshot;

pub use aspects::{Aspect, AspectWriter, PaymentStatusSource};
pub use service::{ProfileRepository, ReconciliationService, SaveIntent, SaveOutcome};
pub use snapshot::{ProfileRecord, RemoteProfileRecord, UpsertReceipt};
