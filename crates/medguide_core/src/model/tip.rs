//! Prioritized safety tips shown as side lists on several pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyTip {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl SafetyTip {
    pub fn new(title: &str, description: &str, priority: Priority) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            priority,
        }
    }
}
