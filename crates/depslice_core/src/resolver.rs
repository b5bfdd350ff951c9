use log::trace;
use path_clean::clean;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::config::SliceRules;

/// Resolves `request` against `containing_dir` to an existing file.
///
/// Absolute requests are used as-is. Relative ones are joined to
/// `containing_dir`, then retried with each of [`SliceRules::resolve_suffixes`]
/// in order. Bare package names resolve only if a same-named file happens to
/// sit next to the referencing file; packages themselves are never looked up.
///
/// Exclusion of ignored directories is left to the caller.
pub fn resolve(rules: &SliceRules, containing_dir: &Path, request: &str) -> Option<PathBuf> {
    trace!("Resolving: '{}' from {}", request, containing_dir.display());
    let req = Path::new(request);

    let resolved = if req.is_absolute() {
        trace!("Resolving as absolute path: '{}'", request);
        req.is_file().then(|| clean(req))
    } else {
        let candidate = clean(containing_dir.join(req));
        resolve_file(rules, &candidate)
    };

    match &resolved {
        Some(p) => trace!("Resolved '{}' to {}", request, p.display()),
        None => trace!("Failed to resolve '{}'", request),
    }
    resolved
}

fn resolve_file(rules: &SliceRules, p: &Path) -> Option<PathBuf> {
    // Try exact path first
    if p.is_file() {
        return Some(p.to_path_buf());
    }

    for suffix in rules.resolve_suffixes() {
        let mut name = OsString::from(p.as_os_str());
        name.push(suffix);
        let candidate = PathBuf::from(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}
