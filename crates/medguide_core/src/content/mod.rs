//! Static content tables.
//!
//! # Responsibility
//! - Build every page's reference data exactly once per process.
//! - Hand out shared read-only references to the built tables.
//!
//! # Invariants
//! - Tables are built lazily on first access and never mutated afterwards.
//! - Category ids on tabbed pages equal the tab keys in `view::tabs`.

mod emergency;
mod home;
mod interactions;
mod medicines;
mod resources;
mod side_effects;

pub use emergency::{emergency_checklist, emergency_contacts, emergency_scenarios};
pub use home::home_page;
pub use interactions::{interaction_catalog, prevention_tips};
pub use medicines::medicine_catalog;
pub use resources::{medication_tips, resource_catalog};
pub use side_effects::side_effect_catalog;

/// Emergency number quoted on the side-effects page banner.
pub const SIDE_EFFECTS_EMERGENCY_NUMBER: &str = "108";
/// Emergency number quoted on every other page.
pub const EMERGENCY_NUMBER: &str = "911";
/// National poison control helpline.
pub const POISON_CONTROL_NUMBER: &str = "1-800-222-1222";
