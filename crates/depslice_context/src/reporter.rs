use anyhow::Result;
use depslice_core::read_lossy;
use log::{debug, trace};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::types::ContextSlice;

/// Above this many files the entry file is repeated at the start and the end
const BOOKEND_THRESHOLD: usize = 5;

const DELIMITER: &str = "----------------------";

fn preamble(entry_label: &str) -> String {
    format!(
        "\n\n\nSYSTEM:\nYou are a Senior Node.js Software Engineer. Please use the following \
         directory structure and provided project files to respond about the '{}' file.  Also, \
         please try to keep the programming style and structure similar to the provided \
         file(s).\n\n",
        entry_label
    )
}

/// Files in the order they are printed.
///
/// Long lists get the entry file first and last, on top of its own position.
pub fn output_order(files: &[PathBuf], entry: &Path) -> Vec<PathBuf> {
    if files.len() > BOOKEND_THRESHOLD {
        trace!("Bookending {} files with {}", files.len(), entry.display());
        let mut out = Vec::with_capacity(files.len() + 2);
        out.push(entry.to_path_buf());
        out.extend(files.iter().cloned());
        out.push(entry.to_path_buf());
        out
    } else {
        files.to_vec()
    }
}

/// Writes the preamble, the directory tree as JSON and every file's content.
///
/// File contents are read while writing; callers that must not emit partial
/// output should render into a buffer first.
pub fn print_context<W: Write>(writer: &mut W, slice: &ContextSlice) -> Result<()> {
    debug!("Printing context for {} files", slice.files.len());
    writeln!(writer, "{}", preamble(&slice.entry_label))?;

    writeln!(writer, "Directory Structure:")?;
    writeln!(writer, "{}", serde_json::to_string_pretty(&slice.tree)?)?;

    for file in output_order(&slice.files, &slice.entry) {
        let content = read_lossy(&file)?;
        writeln!(writer, "\nFile: {}", file.display())?;
        writeln!(writer, "{}", DELIMITER)?;
        writeln!(writer, "{}", content)?;
        writeln!(writer, "{}", DELIMITER)?;
    }

    writeln!(writer, "\n\n")?;
    writer.flush()?;
    Ok(())
}
