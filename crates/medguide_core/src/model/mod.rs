//! Content data model for every reference page.
//!
//! # Responsibility
//! - Define the flat record shapes shown on each page.
//! - Define the category/catalog containers records are grouped in.
//!
//! # Invariants
//! - Records are plain data; they are created once by `content` and never
//!   mutated afterwards.
//! - Enum labels are closed sets; no free-form severity strings.

pub mod category;
pub mod emergency;
pub mod home;
pub mod interaction;
pub mod medicine;
pub mod resource;
pub mod side_effect;
pub mod tip;

pub(crate) fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
