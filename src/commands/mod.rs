//! Command implementations

pub mod simple;

pub use simple::{GameOutcome, SimpleConfig, run_simple};
