//! Compounded-inflation arithmetic.
//!
//! - `calc`: adjust a peso amount between two months by the compounded
//!   monthly index changes
//! - `summary`: per-calendar-year grouping of the monthly rates

pub mod calc;
pub mod summary;

pub use calc::*;
pub use summary::*;
