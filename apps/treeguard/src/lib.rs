//! treeguard core library.
//!
//! This crate exposes programmatic APIs for verifying a repository tree
//! against a declarative rule table before commits or builds proceed.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and effective settings resolution.
//! - `rules`: The built-in rule table.
//! - `checks`: Path, pattern-folder, and alternatives checkers plus dispatch.
//! - `validate`: Runs every entry and aggregates the outcome.
//! - `models`: Rule table schema and validation outcome structs.
//! - `output`: Human/JSON printers.
//! - `error`: Diagnostic and config-loading error types.
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod rules;
pub mod validate;
