//! Command implementations for the `macrodoc` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Helper generation — `macrodoc generate`.
///
/// Loads the composer class map and the macro manifest, filters classes by
/// namespace, and writes the IDE helper stub.
pub mod generate;
