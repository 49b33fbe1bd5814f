//! Case-insensitive substring filter over category catalogs.
//!
//! # Responsibility
//! - Keep records with at least one searchable field containing the term.
//! - Drop categories left without records.
//!
//! # Invariants
//! - The empty term returns the catalog unchanged, empty categories included.
//! - Category and record order are preserved.
//! - `filter(&filter(c, t), t) == filter(c, t)`.

use crate::model::category::Catalog;
use log::debug;

/// Catalog view produced by [`filter`]; same shape as its source.
pub type FilteredCatalog<R> = Catalog<R>;

/// Record kinds that take part in text search.
pub trait Searchable {
    /// Fields matched against the search term, in any order.
    fn search_fields(&self) -> Vec<&str>;
}

/// Returns whether any searchable field of `record` contains `term`,
/// ignoring case. The empty term matches every record.
pub fn matches<R: Searchable + ?Sized>(record: &R, term: &str) -> bool {
    matches_lowered(record, &term.to_lowercase())
}

/// Filters `catalog` down to records matching `term`.
///
/// The term is used as-is: only the exact empty string disables filtering,
/// so a whitespace-only term is an ordinary substring.
pub fn filter<R: Searchable + Clone>(catalog: &Catalog<R>, term: &str) -> FilteredCatalog<R> {
    if term.is_empty() {
        return catalog.clone();
    }

    let needle = term.to_lowercase();
    let categories = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let records = category
                .records
                .iter()
                .filter(|record| matches_lowered(*record, &needle))
                .cloned()
                .collect::<Vec<_>>();
            (!records.is_empty()).then(|| category.with_records(records))
        })
        .collect::<Vec<_>>();

    let filtered = Catalog::new(categories);
    debug!(
        "event=catalog_filter module=search status=ok term_chars={} categories={} records={}",
        term.chars().count(),
        filtered.categories().len(),
        filtered.record_count()
    );
    filtered
}

fn matches_lowered<R: Searchable + ?Sized>(record: &R, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::{filter, matches, Searchable};
    use crate::model::category::{Catalog, Category, Icon};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry(&'static str, &'static str);

    impl Searchable for Entry {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let entry = Entry("Lisinopril", "Blood pressure control");
        assert!(matches(&entry, "LISINO"));
        assert!(matches(&entry, "Press"));
        assert!(!matches(&entry, "sugar"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches(&Entry("", ""), ""));
    }

    #[test]
    fn whitespace_term_is_not_trimmed() {
        let catalog = Catalog::new(vec![Category::new(
            "x",
            "X",
            "",
            Icon::Pill,
            vec![Entry("Memantine", "dementia"), Entry("Alendronate", "Bone health")],
        )]);

        let filtered = filter(&catalog, " ");
        assert_eq!(filtered.record_count(), 1);
        assert_eq!(filtered.categories()[0].records[0].0, "Alendronate");
    }
}
