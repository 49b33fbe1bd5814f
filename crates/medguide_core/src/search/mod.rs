//! Catalog search entry points.
//!
//! # Responsibility
//! - Define which record fields are searchable.
//! - Derive filtered catalog views from a search term.
//!
//! # Invariants
//! - Search never mutates the source catalog.
//! - Search is total: every input string yields a catalog.

pub mod filter;

pub use filter::{filter, matches, FilteredCatalog, Searchable};
