//! Fixed navigation surface.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    Medicines,
    SideEffects,
    Interactions,
    Resources,
    Emergency,
}

impl View {
    /// Every view in navigation-bar order.
    pub const ALL: [View; 6] = [
        View::Home,
        View::Medicines,
        View::SideEffects,
        View::Interactions,
        View::Resources,
        View::Emergency,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Medicines => "/medicines",
            Self::SideEffects => "/side-effects",
            Self::Interactions => "/interactions",
            Self::Resources => "/resources",
            Self::Emergency => "/emergency",
        }
    }

    /// Navigation-bar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Medicines => "Medicine Guide",
            Self::SideEffects => "Side Effects",
            Self::Interactions => "Drug Interactions",
            Self::Resources => "Resources",
            Self::Emergency => "Emergency",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Safe Medicine Use for Seniors",
            Self::Medicines => "Medicine Guide for Seniors",
            Self::SideEffects => "Understanding Side Effects",
            Self::Interactions => "Drug Interactions Guide",
            Self::Resources => "Resources & Support",
            Self::Emergency => "Medical Emergency Guide",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Home => "Safe medicine use, explained simply",
            Self::Medicines => {
                "Find information about common medications, proper usage, and what to expect"
            }
            Self::SideEffects => "Learn what to watch for and when to seek help",
            Self::Interactions => {
                "Understanding how medications, foods, and timing can affect each other"
            }
            Self::Resources => {
                "Essential contacts, educational materials, and helpful organizations for medication safety"
            }
            Self::Emergency => {
                "Quick reference for medication-related emergencies and when to seek immediate help"
            }
        }
    }

    /// Whether the page offers a search input.
    pub fn is_searchable(self) -> bool {
        matches!(
            self,
            Self::Medicines | Self::SideEffects | Self::Interactions | Self::Resources
        )
    }

    /// Resolves a path to its view.
    ///
    /// A single trailing slash is tolerated; matching is exact otherwise.
    ///
    /// # Errors
    /// - Returns `NavigationError::NotFound` for any path outside the view set.
    pub fn from_path(path: &str) -> Result<Self, NavigationError> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => trimmed,
        };

        Self::ALL
            .into_iter()
            .find(|view| view.path() == normalized)
            .ok_or_else(|| NavigationError::NotFound {
                path: path.to_string(),
            })
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No view is mounted at `path`.
    NotFound { path: String },
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "no page found at `{path}`"),
        }
    }
}

impl Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::View;

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = View::ALL.iter().map(|view| view.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), View::ALL.len());
    }

    #[test]
    fn root_path_is_not_stripped() {
        assert_eq!(View::from_path("/"), Ok(View::Home));
    }
}
