//! Command-line interface
//!
//! Argument definitions and command handlers for the `permstable` binary.

pub mod args;
pub mod commands;
