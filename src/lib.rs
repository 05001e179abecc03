//! Kontrast - trial generation engine for simultaneous color contrast experiments.
//!
//! Expands a compact parameter specification (ranges, lists, and
//! value-to-value mappings) into the full Cartesian set of stimulus trials,
//! and flattens recorded sessions into the tabular export consumed by
//! analysis tooling.

pub mod error;
pub mod models;
pub mod services;
