//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - series identifiers and spans (`Casa`, `TimeSpan`, `Period`)
//! - raw and aligned observations (`Observation`, `Series`, `AlignedSeriesSet`)
//! - boundary outputs (`ChartReadyResult`, `SpanStyle`, `Adjustment`)

pub mod types;

pub use types::*;
