//! Time-series assembly core.
//!
//! - date-range materialization (`range`)
//! - last-known-value carry-forward (`fill`)
//! - union-date alignment of independent series (`align`)
//! - display downsampling (`downsample`)
//!
//! Everything here is a pure function over in-memory data; fetching lives in
//! `crate::data`.

pub mod align;
pub mod downsample;
pub mod fill;
pub mod range;

pub use align::*;
pub use downsample::*;
pub use fill::*;
pub use range::*;
