//! # Observability
//!
//! Structured JSON logging for triviad.
//!
//! Logs are synchronous, one JSON object per line, with deterministic
//! field ordering so log output can be diffed and asserted on.

pub mod logger;

pub use logger::{Logger, Severity};
