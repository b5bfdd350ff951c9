//! Core utilities for depslice.
//!
//! This crate gathers the files a JavaScript/TypeScript entry file depends on,
//! including:
//! - Extracting module references (`require`, `import`, `include`) from source text
//! - Resolving references to files (relative, absolute, extension-less)
//! - Walking the reference graph from an entry file
//! - Detecting the project framework and collecting convention-based seed files
//! - Serializing the project directory tree

mod collector;
mod config;
mod constants;
mod framework;
mod graph;
mod parser;
mod resolver;
mod tree;
mod types;

// Re-export public API
pub use collector::{collect_seeds, seed_patterns};
pub use config::{SliceRules, relative_str};
pub use constants::{IGNORED_DIRS, IGNORED_EXTENSIONS, TEMPLATE_EXTENSIONS};
pub use framework::detect_framework;
pub use graph::reachable_files;
pub use parser::{ReferenceExtractor, read_lossy};
pub use resolver::resolve;
pub use tree::{DirectoryTree, TreeEntry, serialize_tree};
pub use types::{FrameworkTag, ModuleReference, RefSyntax};
