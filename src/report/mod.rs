//! Presentation: chart-ready assembly and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the alignment/rate code stays clean and testable
//! - output changes are localized

pub mod chart;
pub mod format;

pub use chart::*;
pub use format::*;
