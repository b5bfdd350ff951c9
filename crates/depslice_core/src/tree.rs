use anyhow::{Context, Result};
use log::{debug, trace};
use serde::{Serialize, Serializer};
use ignore::WalkBuilder;
use std::{collections::BTreeMap, path::Path};

use crate::config::{SliceRules, relative_str};

/// Nested listing of a project directory. Serializes as a JSON object whose
/// values are either `"file"` or another object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryTree {
    pub entries: BTreeMap<String, TreeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    File,
    Directory(DirectoryTree),
}

impl Serialize for TreeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeEntry::File => serializer.serialize_str("file"),
            TreeEntry::Directory(tree) => tree.serialize(serializer),
        }
    }
}

impl DirectoryTree {
    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.get(name)
    }

    pub fn file_count(&self) -> usize {
        self.entries
            .values()
            .map(|e| match e {
                TreeEntry::File => 1,
                TreeEntry::Directory(tree) => tree.file_count(),
            })
            .sum()
    }
}

/// Lists `root` recursively.
///
/// Entries whose root-relative path starts with an ignored directory name are
/// skipped without descending. Files with an ignored extension are omitted.
/// Symlinks are listed as files and never followed.
pub fn serialize_tree(rules: &SliceRules, root: &Path) -> Result<DirectoryTree> {
    debug!("Serializing directory tree from {}", root.display());
    let tree = read_dir_tree(rules, root, root)?;
    debug!("Directory tree lists {} files", tree.file_count());
    Ok(tree)
}

fn read_dir_tree(rules: &SliceRules, root: &Path, dir: &Path) -> Result<DirectoryTree> {
    let mut tree = DirectoryTree::default();
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let dent = result.with_context(|| format!("Failed to list {}", dir.display()))?;
        if dent.depth() == 0 {
            continue;
        }

        let full_path = dent.path();
        let rel = relative_str(root, full_path);
        if rules.starts_with_ignored_dir(&rel) {
            trace!("Pruning ignored entry: {}", rel);
            continue;
        }

        let name = dent.file_name().to_string_lossy().to_string();
        // Links are not followed, so a symlinked directory lists as a file
        if dent.file_type().is_some_and(|ft| ft.is_dir()) {
            let sub = read_dir_tree(rules, root, full_path)?;
            tree.entries.insert(name, TreeEntry::Directory(sub));
        } else if !rules.has_ignored_extension(full_path) {
            tree.entries.insert(name, TreeEntry::File);
        }
    }

    Ok(tree)
}
