//! Category and catalog containers shared by every content page.
//!
//! # Responsibility
//! - Group flat records under a titled, iconed category.
//! - Hold the ordered category list of one page as a `Catalog`.
//!
//! # Invariants
//! - Category order and record order are the display order.
//! - Catalogs are never edited in place; filtered views are new values.

use serde::{Deserialize, Serialize};

/// Icon reference resolved by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertTriangle,
    Apple,
    BookOpen,
    Bone,
    Brain,
    Clock,
    Eye,
    Heart,
    Phone,
    Pill,
    Shield,
    Users,
}

impl Icon {
    /// Stable kebab-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::AlertTriangle => "alert-triangle",
            Self::Apple => "apple",
            Self::BookOpen => "book-open",
            Self::Bone => "bone",
            Self::Brain => "brain",
            Self::Clock => "clock",
            Self::Eye => "eye",
            Self::Heart => "heart",
            Self::Phone => "phone",
            Self::Pill => "pill",
            Self::Shield => "shield",
            Self::Users => "users",
        }
    }
}

/// One titled group of records on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category<R> {
    /// Stable key, also used as the tab key on tabbed pages.
    pub id: String,
    pub name: String,
    /// May be empty when the page shows no category blurb.
    pub description: String,
    pub icon: Icon,
    pub records: Vec<R>,
}

impl<R> Category<R> {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: Icon,
        records: Vec<R>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon,
            records,
        }
    }

    /// Returns a copy of this category's header with `records` substituted.
    pub fn with_records(&self, records: Vec<R>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon,
            records,
        }
    }
}

/// Ordered category list backing one page.
///
/// Filtered views share this type, so a filtered catalog can be filtered
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog<R> {
    categories: Vec<Category<R>>,
}

impl<R> Catalog<R> {
    pub fn new(categories: Vec<Category<R>>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category<R>] {
        &self.categories
    }

    /// Looks up a category by its stable id.
    pub fn category(&self, id: &str) -> Option<&Category<R>> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Returns whether the catalog has no categories at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of records across all categories.
    pub fn record_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.records.len())
            .sum()
    }

    /// Iterates every record in display order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.categories
            .iter()
            .flat_map(|category| category.records.iter())
    }
}

impl<R> From<Vec<Category<R>>> for Catalog<R> {
    fn from(categories: Vec<Category<R>>) -> Self {
        Self::new(categories)
    }
}
