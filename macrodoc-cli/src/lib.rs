//! # macrodoc-cli
//!
//! Command-line tool for generating PHP macro IDE helper files.
//!
//! This crate provides the `macrodoc` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `macrodoc generate` | Write the `_macro_ide_helper.php` stub for a project |
//!
//! ## Architecture
//!
//! The CLI is organized into command modules under [`commands`]:
//!
//! - [`commands::generate`] — helper generation (`macrodoc generate`)
//!
//! All pipeline logic lives in `macrodoc-core`; this crate only handles
//! argument parsing, progress output and exit codes.

pub mod commands;
