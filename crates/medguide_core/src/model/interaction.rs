//! Drug interaction record.
//!
//! One record shape covers the three interaction tabs; the subject variant
//! decides how the title is built.

use crate::model::owned;
use crate::search::Searchable;
use serde::{Deserialize, Serialize};

/// Risk badge for an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Badge caption, e.g. `High Risk`.
    pub fn badge(self) -> String {
        format!("{} Risk", self.label())
    }
}

/// What interacts with what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionSubject {
    /// Two or more medications affecting each other.
    DrugDrug { medications: Vec<String> },
    /// A medication affected by a food.
    DrugFood { medication: String, food: String },
    /// A medication whose effect depends on when it is taken.
    Timing { medication: String, timing: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub subject: InteractionSubject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    pub effect: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

impl Interaction {
    pub fn drug_drug(medications: &[&str], risk_level: RiskLevel, effect: &str) -> Self {
        Self::with_subject(
            InteractionSubject::DrugDrug {
                medications: owned(medications),
            },
            Some(risk_level),
            effect,
        )
    }

    pub fn drug_food(medication: &str, food: &str, risk_level: RiskLevel, effect: &str) -> Self {
        Self::with_subject(
            InteractionSubject::DrugFood {
                medication: medication.to_string(),
                food: food.to_string(),
            },
            Some(risk_level),
            effect,
        )
    }

    pub fn timing(medication: &str, timing: &str, reason: &str, effect: &str) -> Self {
        let mut interaction = Self::with_subject(
            InteractionSubject::Timing {
                medication: medication.to_string(),
                timing: timing.to_string(),
            },
            None,
            effect,
        );
        interaction.reason = Some(reason.to_string());
        interaction
    }

    fn with_subject(
        subject: InteractionSubject,
        risk_level: Option<RiskLevel>,
        effect: &str,
    ) -> Self {
        Self {
            subject,
            risk_level,
            effect: effect.to_string(),
            symptoms: Vec::new(),
            action: None,
            reason: None,
            tips: Vec::new(),
        }
    }

    pub fn with_symptoms(mut self, symptoms: &[&str]) -> Self {
        self.symptoms = owned(symptoms);
        self
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn with_tips(mut self, tips: &[&str]) -> Self {
        self.tips = owned(tips);
        self
    }

    /// Display title: `A + B` for drug pairs, `drug + food|timing` otherwise.
    pub fn title(&self) -> String {
        match &self.subject {
            InteractionSubject::DrugDrug { medications } => medications.join(" + "),
            InteractionSubject::DrugFood { medication, food } => format!("{medication} + {food}"),
            InteractionSubject::Timing { medication, timing } => {
                format!("{medication} + {timing}")
            }
        }
    }
}

impl Searchable for Interaction {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = match &self.subject {
            InteractionSubject::DrugDrug { medications } => {
                medications.iter().map(String::as_str).collect()
            }
            InteractionSubject::DrugFood { medication, food } => {
                vec![medication.as_str(), food.as_str()]
            }
            InteractionSubject::Timing { medication, timing } => {
                vec![medication.as_str(), timing.as_str()]
            }
        };
        fields.push(self.effect.as_str());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::{Interaction, RiskLevel};
    use crate::search::Searchable;

    #[test]
    fn drug_drug_title_joins_all_medications() {
        let interaction =
            Interaction::drug_drug(&["Warfarin", "Aspirin"], RiskLevel::High, "bleeding");
        assert_eq!(interaction.title(), "Warfarin + Aspirin");
    }

    #[test]
    fn timing_title_uses_timing_and_has_no_risk() {
        let interaction = Interaction::timing("Diuretics", "Morning", "sleep", "compliance");
        assert_eq!(interaction.title(), "Diuretics + Morning");
        assert!(interaction.risk_level.is_none());
        assert_eq!(interaction.reason.as_deref(), Some("sleep"));
    }

    #[test]
    fn search_fields_cover_subject_and_effect() {
        let interaction =
            Interaction::drug_food("Warfarin", "Leafy greens", RiskLevel::Moderate, "Reduced effect");
        assert_eq!(
            interaction.search_fields(),
            vec!["Warfarin", "Leafy greens", "Reduced effect"]
        );
    }

    #[test]
    fn risk_badge_caption() {
        assert_eq!(RiskLevel::High.badge(), "High Risk");
    }
}
