//! Output helpers.
//!
//! - chart-ready JSON and aligned-history CSV exports (`export`)

pub mod export;

pub use export::*;
