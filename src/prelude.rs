//! Prelude module for annual_date crate.
//!
//! Re-exports the derive macros from derive_more and the tracing macros
//! used throughout the crate.

pub use derive_more::Display;
#[allow(unused_imports)]
pub use tracing::{debug, trace};
