//! Tab selection for tabbed pages.
//!
//! # Invariants
//! - A selection always holds exactly one member of its closed tab set.
//! - A rejected key leaves the current selection untouched.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed set of tabs on one page.
///
/// Tab keys double as category ids in the matching content catalog.
pub trait Tab: Copy + Eq + 'static {
    /// Every tab in display order.
    const ALL: &'static [Self];
    /// Tab selected when the page opens.
    const DEFAULT: Self;

    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideEffectTab {
    Common,
    Serious,
    Interactions,
}

impl Tab for SideEffectTab {
    const ALL: &'static [Self] = &[Self::Common, Self::Serious, Self::Interactions];
    const DEFAULT: Self = Self::Common;

    fn key(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Serious => "serious",
            Self::Interactions => "interactions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionTab {
    DrugDrug,
    DrugFood,
    Timing,
}

impl Tab for InteractionTab {
    const ALL: &'static [Self] = &[Self::DrugDrug, Self::DrugFood, Self::Timing];
    const DEFAULT: Self = Self::DrugDrug;

    fn key(self) -> &'static str {
        match self {
            Self::DrugDrug => "drug-drug",
            Self::DrugFood => "drug-food",
            Self::Timing => "timing",
        }
    }
}

/// Active tab of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection<T: Tab> {
    selected: T,
}

impl<T: Tab> TabSelection<T> {
    /// Starts at the page's default tab.
    pub fn new() -> Self {
        Self {
            selected: T::DEFAULT,
        }
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    /// Replaces the active tab.
    pub fn select(&mut self, tab: T) {
        self.selected = tab;
    }

    /// Replaces the active tab by key.
    ///
    /// # Errors
    /// - Returns `UnknownTabError` when `key` names no tab; the selection is
    ///   left unchanged.
    pub fn select_key(&mut self, key: &str) -> Result<T, UnknownTabError> {
        let tab = T::from_key(key.trim()).ok_or_else(|| UnknownTabError {
            key: key.to_string(),
            expected: T::ALL.iter().map(|tab| tab.key()).collect(),
        })?;
        self.selected = tab;
        Ok(tab)
    }
}

impl<T: Tab> Default for TabSelection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTabError {
    pub key: String,
    pub expected: Vec<&'static str>,
}

impl Display for UnknownTabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown tab `{}`; expected {}",
            self.key,
            self.expected.join("|")
        )
    }
}

impl Error for UnknownTabError {}

#[cfg(test)]
mod tests {
    use super::{InteractionTab, SideEffectTab, Tab, TabSelection};

    #[test]
    fn keys_round_trip() {
        for tab in SideEffectTab::ALL {
            assert_eq!(SideEffectTab::from_key(tab.key()), Some(*tab));
        }
        for tab in InteractionTab::ALL {
            assert_eq!(InteractionTab::from_key(tab.key()), Some(*tab));
        }
    }

    #[test]
    fn select_key_trims_input() {
        let mut selection = TabSelection::<InteractionTab>::new();
        assert_eq!(selection.select_key(" timing "), Ok(InteractionTab::Timing));
    }
}
