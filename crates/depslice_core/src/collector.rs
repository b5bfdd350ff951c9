use anyhow::Result;
use glob_match::glob_match;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::{
    config::{SliceRules, relative_str},
    types::FrameworkTag,
};

const GENERIC_SOURCE_GLOB: &str = "**/*.js";

/// Root-relative globs selecting the convention files for `tag`.
pub fn seed_patterns(rules: &SliceRules, tag: FrameworkTag) -> Vec<String> {
    let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    match tag {
        FrameworkTag::Express => {
            let templates = rules
                .template_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect::<Vec<_>>()
                .join(",");
            let mut patterns = owned(&[
                "app.js",
                "server.js",
                "routes/**/*.js",
                "controllers/**/*.js",
                "models/**/*.js",
            ]);
            patterns.push(format!("views/**/*.{{{}}}", templates));
            patterns
        }
        FrameworkTag::React => owned(&[
            "src/components/**/*.{js,jsx,tsx}",
            "src/hooks/**/*.{js,jsx,tsx}",
            "src/redux/**/*.{js,jsx,tsx}",
        ]),
        FrameworkTag::Vue => {
            owned(&["src/components/**/*.vue", "src/store/**/*.js", "src/mixins/**/*.js"])
        }
        FrameworkTag::Angular => owned(&[
            "src/app/**/*.{ts,html}",
            "src/app/services/**/*.ts",
            "src/app/store/**/*.ts",
        ]),
        // No conventions for these, fall back to every script
        FrameworkTag::Koa | FrameworkTag::Nest | FrameworkTag::None => {
            owned(&[GENERIC_SOURCE_GLOB])
        }
    }
}

/// Convention-based seed files for `tag`, in file-name order.
///
/// Ignored directories are pruned during the walk (never descended into) and
/// files with an ignored extension are skipped.
pub fn collect_seeds(rules: &SliceRules, tag: FrameworkTag, root: &Path) -> Result<Vec<PathBuf>> {
    let patterns = seed_patterns(rules, tag);
    debug!("Collecting seed files for {} with patterns {:?}", tag, patterns);

    let prune_rules = rules.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |dent| {
            let is_dir = dent.file_type().is_some_and(|ft| ft.is_dir());
            let name = dent.file_name().to_string_lossy();
            !(dent.depth() > 0 && is_dir && prune_rules.is_ignored_dir_name(&name))
        })
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if rules.has_ignored_extension(p) {
            trace!("Skipping ignored extension: {}", p.display());
            continue;
        }

        let rel = relative_str(root, p);
        if patterns.iter().any(|pattern| glob_match(pattern, &rel)) {
            trace!("Matched seed file: {}", rel);
            files.push(p.to_path_buf());
        }
    }

    debug!("Collected {} seed files", files.len());
    Ok(files)
}
