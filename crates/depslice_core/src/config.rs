use log::trace;
use std::path::{Component, Path};

use crate::constants::{
    DATA_EXTENSION, EXPRESS_PACKAGE, IGNORED_DIRS, IGNORED_EXTENSIONS, KOA_PACKAGE, NEST_PACKAGE,
    REACT_PACKAGE, SCRIPT_EXTENSION, TEMPLATE_EXTENSIONS,
};
use crate::types::FrameworkTag;

/// Exclusion lists and resolution suffixes for a single run.
///
/// Components take a `&SliceRules` and never read the constants directly.
///
/// Directory matching is coarse: traversal uses a substring match and the tree
/// uses a prefix match, so `docsite/` is treated like `docs/` and `templates/`
/// like `temp/`.
#[derive(Debug, Clone)]
pub struct SliceRules {
    pub ignored_dirs: Vec<String>,
    pub ignored_extensions: Vec<String>,
    pub template_extensions: Vec<String>,
    pub script_extension: String,
    pub data_extension: String,
    /// `package.json` dependency names mapped to a framework, checked in order
    pub framework_packages: Vec<(String, FrameworkTag)>,
}

impl Default for SliceRules {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            ignored_dirs: owned(IGNORED_DIRS),
            ignored_extensions: owned(IGNORED_EXTENSIONS),
            template_extensions: owned(TEMPLATE_EXTENSIONS),
            script_extension: SCRIPT_EXTENSION.to_string(),
            data_extension: DATA_EXTENSION.to_string(),
            framework_packages: vec![
                (EXPRESS_PACKAGE.to_string(), FrameworkTag::Express),
                (KOA_PACKAGE.to_string(), FrameworkTag::Koa),
                (NEST_PACKAGE.to_string(), FrameworkTag::Nest),
                (REACT_PACKAGE.to_string(), FrameworkTag::React),
            ],
        }
    }
}

impl SliceRules {
    /// Suffixes tried, in order, when a reference does not name an existing file
    pub fn resolve_suffixes(&self) -> impl Iterator<Item = &str> {
        [self.script_extension.as_str(), self.data_extension.as_str()]
            .into_iter()
            .chain(self.template_extensions.iter().map(String::as_str))
    }

    pub fn has_ignored_extension(&self, path: &Path) -> bool {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        self.ignored_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Exact name match, used to prune directories while walking
    pub fn is_ignored_dir_name(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }

    /// Substring match on the root-relative path, used by traversal.
    ///
    /// Files outside `root` are matched on their full path.
    pub fn mentions_ignored_dir(&self, root: &Path, path: &Path) -> bool {
        let rel = relative_str(root, path);
        let hit = self.ignored_dirs.iter().find(|d| rel.contains(d.as_str()));
        if let Some(dir) = hit {
            trace!("Path {} matches ignored directory '{}'", path.display(), dir);
        }
        hit.is_some()
    }

    /// Prefix match on a root-relative path, used by the directory tree
    pub fn starts_with_ignored_dir(&self, rel: &str) -> bool {
        self.ignored_dirs.iter().any(|d| rel.starts_with(d.as_str()))
    }
}

/// `path` relative to `root`, with `/` separators.
pub fn relative_str(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(p) => Some(p.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().to_string(),
    }
}
