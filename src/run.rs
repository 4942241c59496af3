use crate::config::Config;
use crate::discover::discover;
use crate::error::Result;
use crate::logger::Logger;
use crate::normalize::normalize_file;
use std::io::Write;

/// Sort every target file under the base directory, reporting as we go.
///
/// Returns how many files were sorted. Stops at the first error, in which
/// case the summary line is never printed.
pub fn run<OUT, ERR>(cfg: &Config, log: &mut Logger<OUT, ERR>) -> Result<usize>
where
    OUT: Write,
    ERR: Write,
{
    let entries = discover(cfg)?;
    write!(log.progress(), "Processing {} JSON files...\n\n", entries.len())?;

    let mut sorted = 0;
    for entry in &entries {
        normalize_file(&entry.path)?;
        write!(log.progress(), "✓ {}\n", entry.name)?;
        sorted += 1;
    }

    write!(log.progress(), "\nSorted {} files\n", sorted)?;
    Ok(sorted)
}
