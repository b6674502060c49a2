//! Core functionality module
//!
//! Configuration management and error handling shared by the color models
//! and the CLI.
//!
//! # Submodules
//!
//! - `config` - Configuration loading, saving, and management
//! - `error` - Error types and result aliases

pub mod config;
pub mod error;
