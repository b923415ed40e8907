//! Observability for TruthLens.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_default};
