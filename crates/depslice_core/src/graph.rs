use anyhow::Result;
use log::{debug, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{config::SliceRules, parser::ReferenceExtractor, resolver::resolve};

/// Every file reachable from `entry` through module references, in
/// depth-first preorder, starting with `entry` itself.
///
/// The walk uses an explicit stack and a visited set owned by this call, so
/// cycles terminate and deep chains cannot exhaust the call stack. Children
/// are pushed in reverse so they are visited in the order they were
/// extracted. References landing under an ignored directory are dropped.
///
/// Failing to read any visited file aborts the walk.
pub fn reachable_files(
    rules: &SliceRules,
    root: &Path,
    entry: &Path,
    extractor: &ReferenceExtractor,
) -> Result<Vec<PathBuf>> {
    trace!("Computing reachable files from: {}", entry.display());
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut order: Vec<PathBuf> = Vec::new();
    let mut stack: Vec<PathBuf> = vec![entry.to_path_buf()];

    while let Some(cur) = stack.pop() {
        if !visited.insert(cur.clone()) {
            continue;
        }
        trace!("Visiting file: {}", cur.display());

        let refs = extractor.references_for(&cur)?;
        let dir = cur.parent().unwrap_or(root);

        let mut next: Vec<PathBuf> = Vec::new();
        for r in refs {
            let Some(resolved) = resolve(rules, dir, &r.request) else {
                trace!("Could not resolve reference: '{}'", r.request);
                continue;
            };
            if rules.mentions_ignored_dir(root, &resolved) {
                trace!("Skipping reference into ignored directory: {}", resolved.display());
                continue;
            }
            if !visited.contains(&resolved) {
                next.push(resolved);
            }
        }

        order.push(cur);
        stack.extend(next.into_iter().rev());
    }

    debug!("Computed {} reachable files from {}", order.len(), entry.display());
    Ok(order)
}
