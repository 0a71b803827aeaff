//! Shared helpers: threshold validation and report number formatting.

pub mod format;
pub mod validation;
