//! Explanatory text attached to every result.
//!
//! Both generators are pure functions of the signals and the final score, so
//! the same inputs always yield the same strings in the same order.

pub mod findings;
pub mod recommendations;

pub use findings::key_findings;
pub use recommendations::recommendations;
