//! Run command handler.
//!
//! Runs the battery monitor in the foreground until Ctrl+C.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::journal::EventJournal;
use crate::core::monitor::MonitorRuntime;
use crate::platform::{DesktopPopup, SpeechSynth, SystemBatterySensor, SystemBeep};

/// Execute the run command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let journal_path = match matches.get_one::<String>("journal") {
        Some(path) => PathBuf::from(path),
        None => EventJournal::default_path().context("Failed to resolve journal location")?,
    };

    let sensor = SystemBatterySensor::new().context("Failed to open battery sensor")?;
    let journal = EventJournal::new(journal_path.clone());

    let runtime = MonitorRuntime::start(
        Box::new(sensor),
        Box::new(journal),
        Box::new(DesktopPopup::new()),
        Box::new(SpeechSynth::new()),
        Box::new(SystemBeep::new()),
    )
    .context("Failed to start battery monitor")?;

    println!(
        "{}",
        "Battery monitor running. Press Ctrl+C to stop.".green().bold()
    );
    println!("Journal: {}", journal_path.display());

    // Shared cancellation flag flipped by the Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        println!();
        println!("{}", "Stopping battery monitor...".yellow().bold());
        running_clone.store(false, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    while running.load(Ordering::Relaxed) {
        thread::sleep(Duration::from_millis(200));
    }

    runtime.stop();
    println!("{}", "Battery monitor stopped.".green());

    Ok(())
}
