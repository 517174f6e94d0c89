//! `permstable` - permissions table generator
//!
//! Renders the permission system's resource catalog as a markdown table
//! and splices it into the documentation website between marker lines.

pub mod catalog;
pub mod cli;
pub mod docgen;
pub mod document;
pub mod error;
pub mod observability;
