//! File-backed event journal.
//!
//! The user-visible record of what the monitor saw and did. One line per
//! entry, append-only, cleared wholesale when the sequence number wraps.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::monitor::{LogSink, Severity};
use crate::error::{BattwatchError, Result};

/// Append-only journal file. Entries look like:
///
/// ```text
/// [2026-08-22 14:03:55] #0042 INFO Laptop battery is ON STANDBY with 80% remaining.
/// ```
pub struct EventJournal {
    path: PathBuf,
}

impl EventJournal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Journal location under the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(data_dir) = dirs::data_dir() {
            return Ok(data_dir.join("battwatch").join("events.log"));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| BattwatchError::journal("could not determine a data directory"))?;
        Ok(home.join(".battwatch").join("events.log"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last `n` entries, oldest first. A missing journal reads as empty.
    pub fn tail(&self, n: usize) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let lines: Vec<&str> = data.lines().collect();
        let skip = lines.len().saturating_sub(n);
        Ok(lines[skip..].iter().map(|line| line.to_string()).collect())
    }
}

impl LogSink for EventJournal {
    fn write(&mut self, message: &str, severity: Severity, sequence: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(
            file,
            "[{}] #{:04} {} {}",
            timestamp,
            sequence,
            severity.as_str(),
            message
        )?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::write(&self.path, b"")?;
        }
        Ok(())
    }
}
