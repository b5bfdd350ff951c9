use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use depslice_context::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // Missing arguments exit here with usage on stderr
    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let slice = depslice_context::build_context_slice(cfg)?;
    debug!("Collected {} files", slice.files.len());

    // Nothing reaches stdout unless the whole report rendered
    let mut rendered = Vec::new();
    depslice_context::print_context(&mut rendered, &slice)?;

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    let mut stdout = BufWriter::new(std::io::stdout());
    stdout.write_all(&rendered)?;
    stdout.flush()?;

    let elapsed_ms = start.elapsed().as_millis();
    info!("Wrote {} bytes", rendered.len());
    eprintln!(
        "{} Collected {} files for {} (framework: {}) in {}ms.",
        "●".bright_blue(),
        slice.files.len().to_string().cyan(),
        slice.entry_label.cyan(),
        slice.framework.to_string().cyan(),
        elapsed_ms.to_string().cyan()
    );

    Ok(())
}
