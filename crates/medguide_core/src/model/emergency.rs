//! Emergency page records: scenarios, contacts and the preparedness checklist.

use crate::model::category::Icon;
use crate::model::owned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSeverity {
    Critical,
    Urgent,
}

impl ScenarioSeverity {
    /// Upper-case badge caption.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Urgent => "URGENT",
        }
    }
}

/// A medication-related emergency with warning signs and ordered actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyScenario {
    pub title: String,
    pub icon: Icon,
    pub severity: ScenarioSeverity,
    pub symptoms: Vec<String>,
    /// Ordered; rendered as a numbered list.
    pub immediate_actions: Vec<String>,
    pub medication_note: String,
}

impl EmergencyScenario {
    pub fn new(
        title: &str,
        icon: Icon,
        severity: ScenarioSeverity,
        symptoms: &[&str],
        immediate_actions: &[&str],
        medication_note: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            icon,
            severity,
            symptoms: owned(symptoms),
            immediate_actions: owned(immediate_actions),
            medication_note: medication_note.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub service: String,
    /// Phone number, or a reminder to fill in a personal number.
    pub number: String,
    pub when: String,
    pub icon: Icon,
}

impl EmergencyContact {
    pub fn new(service: &str, number: &str, when: &str, icon: Icon) -> Self {
        Self {
            service: service.to_string(),
            number: number.to_string(),
            when: when.to_string(),
            icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    Critical,
    Essential,
    Important,
}

impl ChecklistStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Essential => "essential",
            Self::Important => "important",
        }
    }
}

/// One item to keep at hand for emergencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item: String,
    pub description: String,
    pub status: ChecklistStatus,
}

impl ChecklistItem {
    pub fn new(item: &str, description: &str, status: ChecklistStatus) -> Self {
        Self {
            item: item.to_string(),
            description: description.to_string(),
            status,
        }
    }
}
