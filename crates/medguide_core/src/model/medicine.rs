//! Medicine guide record.

use crate::model::owned;
use crate::search::Searchable;
use serde::{Deserialize, Serialize};

/// One medicine entry in the medicine guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    /// Short purpose label, shown as a badge next to the name.
    pub purpose: String,
    pub common_dosage: String,
    pub key_points: Vec<String>,
    pub side_effects: Vec<String>,
}

impl Medicine {
    pub fn new(
        name: impl Into<String>,
        purpose: impl Into<String>,
        common_dosage: impl Into<String>,
        key_points: &[&str],
        side_effects: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            common_dosage: common_dosage.into(),
            key_points: owned(key_points),
            side_effects: owned(side_effects),
        }
    }
}

/// Medicines are searched by name and purpose only.
impl Searchable for Medicine {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.purpose.as_str()]
    }
}
