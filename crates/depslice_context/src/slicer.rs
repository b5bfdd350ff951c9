use anyhow::Result;
use depslice_core::{
    ReferenceExtractor, collect_seeds, detect_framework, reachable_files, serialize_tree,
};
use log::{debug, info, trace};
use std::{collections::HashSet, path::PathBuf};

use crate::{config::Config, types::ContextSlice};

/// Gathers everything needed to present `cfg.entry`: framework seeds, the
/// entry's dependency closure and the directory tree.
///
/// Any I/O or manifest error aborts the whole run.
pub fn build_context_slice(mut cfg: Config) -> Result<ContextSlice> {
    info!("Starting context slice for {}", cfg.entry.display());

    cfg.initialize()?;
    let root = cfg.root.clone();
    let rules = &cfg.rules;

    let framework = detect_framework(rules, &root)?;
    info!("Detected framework: {}", framework);

    let seeds = collect_seeds(rules, framework, &root)?;
    info!("Found {} seed files", seeds.len());

    let entry = cfg.entry_path();
    let extractor = ReferenceExtractor::new()?;
    let reachable = reachable_files(rules, &root, &entry, &extractor)?;
    info!("Found {} files reachable from {}", reachable.len(), entry.display());

    // `reachable` starts with the entry file
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let files: Vec<PathBuf> = seeds
        .into_iter()
        .chain(reachable)
        .filter(|p| seen.insert(p.clone()))
        .filter(|p| {
            let ignored = rules.has_ignored_extension(p);
            if ignored {
                trace!("Dropping ignored extension: {}", p.display());
            }
            !ignored
        })
        .collect();
    debug!("Relevant file set has {} files", files.len());

    let tree = serialize_tree(rules, &root)?;

    Ok(ContextSlice {
        root,
        entry_label: cfg.entry.to_string_lossy().to_string(),
        entry,
        framework,
        files,
        tree,
    })
}
