use anyhow::{Context, Result};
use clap::Parser;
use depslice_core::SliceRules;
use log::{debug, info};
use path_clean::clean;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "depslice")]
#[command(about = "Print a JS/TS file, everything it depends on and the project layout as LLM context")]
pub struct Config {
    /// Project directory
    pub root: PathBuf,

    /// Entry file, relative to the project directory
    pub entry: PathBuf,

    #[clap(skip)]
    pub rules: SliceRules,
}

impl Config {
    /// Canonicalize the project root. Fails if it does not exist.
    pub fn initialize(&mut self) -> Result<()> {
        debug!("Using provided root directory: {:?}", self.root);
        self.root = self
            .root
            .canonicalize()
            .with_context(|| format!("Failed to open project directory {}", self.root.display()))?;
        info!("Using root directory: {}", self.root.display());
        Ok(())
    }

    /// Absolute, normalized path of the entry file
    pub fn entry_path(&self) -> PathBuf {
        clean(self.root.join(&self.entry))
    }
}
