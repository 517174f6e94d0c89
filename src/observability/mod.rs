//! Observability module
//!
//! Logging setup for `permstable` runs.

pub mod logging;

pub use logging::{LogFormat, LogSettings, init_logging};
