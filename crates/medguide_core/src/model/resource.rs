//! Resource directory record.

use crate::search::Searchable;
use serde::{Deserialize, Serialize};

/// Kind of resource; decides which call to action is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Emergency,
    Urgent,
    Support,
    Website,
    Download,
    Local,
}

impl ResourceKind {
    /// Call-to-action caption, if this kind has one beyond contact/link.
    pub fn call_to_action(self) -> Option<&'static str> {
        match self {
            Self::Download => Some("Download Guide"),
            Self::Local => Some("Find Local Services"),
            Self::Emergency | Self::Urgent | Self::Support | Self::Website => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub kind: ResourceKind,
}

impl ResourceItem {
    pub fn new(title: &str, description: &str, kind: ResourceKind) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            contact: None,
            link: None,
            kind,
        }
    }

    pub fn with_contact(mut self, contact: &str) -> Self {
        self.contact = Some(contact.to_string());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}

impl Searchable for ResourceItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}
