//! Navigation and per-page selection state.
//!
//! # Responsibility
//! - Name the fixed set of views and their static paths.
//! - Own the active tab of tabbed pages.
//!
//! # Invariants
//! - The view set and every tab set are closed; no runtime registration.
//! - Selection changes are synchronous replacements with no side effects.

pub mod navigation;
pub mod tabs;
