//! Core reference content and search logic for MedGuide.
//! This crate is the single source of truth for content and its invariants.

pub mod content;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::category::{Catalog, Category, Icon};
pub use model::emergency::{
    ChecklistItem, ChecklistStatus, EmergencyContact, EmergencyScenario, ScenarioSeverity,
};
pub use model::home::{Feature, HomePage};
pub use model::interaction::{Interaction, InteractionSubject, RiskLevel};
pub use model::medicine::Medicine;
pub use model::resource::{ResourceItem, ResourceKind};
pub use model::side_effect::{Severity, SideEffect};
pub use model::tip::{Priority, SafetyTip};
pub use search::{filter, matches, FilteredCatalog, Searchable};
pub use view::navigation::{NavigationError, View};
pub use view::tabs::{InteractionTab, SideEffectTab, Tab, TabSelection, UnknownTabError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
