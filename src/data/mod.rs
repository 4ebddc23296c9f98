//! Data source integration.
//!
//! - `client`: REST client for the dollar-quote and inflation endpoints
//! - `cache`: injectable URL-keyed response cache with a configurable TTL

pub mod cache;
pub mod client;

pub use cache::*;
pub use client::*;
