//! Landing page content.

use crate::model::category::Icon;
use serde::{Deserialize, Serialize};

/// One feature card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

impl Feature {
    pub fn new(title: &str, description: &str, icon: Icon) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon,
        }
    }
}

/// Full landing page: intro, feature cards and the emergency notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    pub headline: String,
    pub intro: String,
    pub features: Vec<Feature>,
    pub emergency_notice: String,
}
