//! depfilter-core
//!
//! Core library for pruning CMake-generated dependency graphs.
//!
//! This crate defines the graph document model, a small parser for the DOT
//! subset CMake emits, denylist filtering, and the file-level pipeline tying
//! them together.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! the CLI or any other frontend.

pub mod config;
pub mod dot;
pub mod filter;
pub mod model;
pub mod pipeline;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
