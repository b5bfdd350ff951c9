//! LLM context export for JavaScript/TypeScript projects.
//!
//! This crate collects an entry file, every file it references (transitively),
//! the convention files of the detected framework and the project layout, and
//! prints them as a single prompt-ready text.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use depslice_context::{Config, build_context_slice};
//! use std::io::Write;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("/path/to/project"),
//!     entry: std::path::PathBuf::from("app.js"),
//!     rules: Default::default(),
//! };
//!
//! let slice = build_context_slice(cfg)?;
//!
//! // Render fully before touching stdout so a read error leaves no partial output
//! let mut rendered = Vec::new();
//! depslice_context::print_context(&mut rendered, &slice)?;
//! std::io::stdout().write_all(&rendered)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod reporter;
mod slicer;
mod types;

// Re-export public API
pub use config::Config;
pub use reporter::{output_order, print_context};
pub use slicer::build_context_slice;
pub use types::ContextSlice;
