use depslice_core::{DirectoryTree, FrameworkTag};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ContextSlice {
    pub root: PathBuf,
    /// The entry file as given on the command line
    pub entry_label: String,
    /// Absolute path of the entry file
    pub entry: PathBuf,
    pub framework: FrameworkTag,
    /// Seeds, then the entry file, then traversal results, without ignored extensions
    pub files: Vec<PathBuf>,
    pub tree: DirectoryTree,
}
