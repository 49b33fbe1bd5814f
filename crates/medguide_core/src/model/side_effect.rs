//! Side-effect record and severity labels.
//!
//! # Invariants
//! - At most one of `causes`/`symptoms` is shown as the warning list; causes
//!   win when both are present.
//! - `Severity::Emergency` entries always carry the emergency action note.

use crate::model::owned;
use crate::search::Searchable;
use serde::{Deserialize, Serialize};

/// How urgently a side effect needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Urgent,
    Emergency,
}

impl Severity {
    /// Capitalized badge caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Urgent => "Urgent",
            Self::Emergency => "Emergency",
        }
    }

    pub fn is_emergency(self) -> bool {
        matches!(self, Self::Emergency)
    }
}

/// One side effect with what to watch for and what to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideEffect {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<String>,
    pub what_to_do: Vec<String>,
    pub severity: Severity,
}

impl SideEffect {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        what_to_do: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            causes: Vec::new(),
            symptoms: Vec::new(),
            what_to_do: owned(what_to_do),
            severity,
        }
    }

    pub fn with_causes(mut self, causes: &[&str]) -> Self {
        self.causes = owned(causes);
        self
    }

    pub fn with_symptoms(mut self, symptoms: &[&str]) -> Self {
        self.symptoms = owned(symptoms);
        self
    }

    /// Returns the heading and items of the list shown beside "What to Do".
    pub fn warning_list(&self) -> (&'static str, &[String]) {
        if !self.causes.is_empty() {
            ("Common Causes:", self.causes.as_slice())
        } else {
            ("Warning Signs:", self.symptoms.as_slice())
        }
    }
}

impl Searchable for SideEffect {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.causes.iter().map(String::as_str));
        fields.extend(self.symptoms.iter().map(String::as_str));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::{Severity, SideEffect};

    #[test]
    fn warning_list_prefers_causes() {
        let effect = SideEffect::new("Mixed", "both lists", Severity::Moderate, &["wait"])
            .with_causes(&["cause"])
            .with_symptoms(&["symptom"]);
        let (heading, items) = effect.warning_list();
        assert_eq!(heading, "Common Causes:");
        assert_eq!(items, ["cause".to_string()]);
    }

    #[test]
    fn warning_list_falls_back_to_symptoms() {
        let effect = SideEffect::new("Chest Pain", "pressure", Severity::Emergency, &["call"])
            .with_symptoms(&["Tightness in chest"]);
        let (heading, items) = effect.warning_list();
        assert_eq!(heading, "Warning Signs:");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn only_emergency_severity_is_emergency() {
        assert!(Severity::Emergency.is_emergency());
        assert!(!Severity::Urgent.is_emergency());
        assert_eq!(Severity::Urgent.label(), "Urgent");
    }
}
