//! Loupe CLI - live component preview for design-token workspaces.
//!
//! This crate provides the command-line interface for Loupe, exposing the
//! token extraction, safelist generation, and preview-server functionality
//! of the library crates with clear error messages.
//!
//! # Architecture
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages for terminal output
//! - `cli` - Argument parsing with clap
//! - `commands` - Individual CLI command implementations
//! - `config` - Configuration file handling

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
