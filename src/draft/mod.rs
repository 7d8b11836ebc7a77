//! Draft layer — the mutable profile aggregate and its store.

pub mod model;
pub mod patch;
pub mod store;

pub use model::{
    BadgeSelections, BusinessDetails, Categorization, ContactInfo, DayHours, FaqEntry,
    FeatureSelection, LocationInfo, MediaGallery, PaymentLinkage, Policies,
    RemoteProfileSnapshot, ServiceCatalogue, ServiceEntry, SocialLinks, VendorProfileDraft,
    Weekday, WeeklyAvailability,
};
pub use patch::DraftPatch;
pub use store::DraftStore;
