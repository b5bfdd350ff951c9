use anyhow::{Context, Result};
use log::{debug, trace};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::{
    config::SliceRules,
    constants::{ANGULAR_MANIFEST, PACKAGE_MANIFEST, VUE_CONFIG},
    types::FrameworkTag,
};

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
}

/// Classifies the project at `root`.
///
/// `angular.json` wins over `vue.config.js`, which wins over the
/// `package.json` dependency table. A `package.json` that exists but does not
/// parse is an error.
pub fn detect_framework(rules: &SliceRules, root: &Path) -> Result<FrameworkTag> {
    debug!("Detecting framework under {}", root.display());

    if root.join(ANGULAR_MANIFEST).exists() {
        debug!("Found {}", ANGULAR_MANIFEST);
        return Ok(FrameworkTag::Angular);
    }
    if root.join(VUE_CONFIG).exists() {
        debug!("Found {}", VUE_CONFIG);
        return Ok(FrameworkTag::Vue);
    }

    let manifest_path = root.join(PACKAGE_MANIFEST);
    if !manifest_path.exists() {
        trace!("No {} at {}", PACKAGE_MANIFEST, root.display());
        return Ok(FrameworkTag::None);
    }

    let txt = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest: PackageManifest = serde_json::from_str(&txt)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;
    trace!("Manifest declares {} dependencies", manifest.dependencies.len());

    let tag = rules
        .framework_packages
        .iter()
        .find(|(pkg, _)| manifest.dependencies.contains_key(pkg))
        .map(|(pkg, tag)| {
            debug!("Dependency '{}' selects {}", pkg, tag);
            *tag
        })
        .unwrap_or(FrameworkTag::None);
    Ok(tag)
}
