//! Shared primitives and traits for the uplift experiment-analysis toolkit.
//!
//! `uplift-core` provides the foundation the analysis crates build on:
//!
//! - **Error types** — [`UpliftError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Summarizable`] for result records

pub mod error;
pub mod traits;

pub use error::{Result, UpliftError};
pub use traits::*;
