//! Journal command handler.
//!
//! Inspect or clear the on-disk event journal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::journal::EventJournal;
use crate::core::monitor::LogSink;

/// Execute the journal command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let path = match matches.get_one::<String>("journal") {
        Some(path) => PathBuf::from(path),
        None => EventJournal::default_path().context("Failed to resolve journal location")?,
    };
    let mut journal = EventJournal::new(path);

    if matches.get_flag("clear") {
        journal.clear().context("Failed to clear journal")?;
        println!("{}", "Journal cleared.".green());
        return Ok(());
    }

    let count = matches.get_one::<usize>("tail").copied().unwrap_or(20);
    let lines = journal.tail(count)?;
    if lines.is_empty() {
        println!("{}", "Journal is empty.".dimmed());
        return Ok(());
    }

    for line in &lines {
        if line.contains(" ERROR ") {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
