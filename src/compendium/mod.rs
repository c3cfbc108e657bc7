//! Martial soul catalog and derived statistics
//!
//! Everything in this module is pure data: JSON in, records and aggregate
//! statistics out. No rendering or platform dependencies so the whole
//! pipeline is testable without a window.

pub mod catalog;
pub mod soul;
pub mod summary;

pub use catalog::{Compendium, DEFAULT_DATA_PATH, LoadError};
pub use soul::MartialSoul;
pub use summary::{CompendiumSummary, RARE_GRADE_THRESHOLD};
