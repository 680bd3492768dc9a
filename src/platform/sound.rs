//! Audible system beep.

use crate::core::monitor::BeepChannel;
use crate::error::Result;

/// Best-effort beep. Failures are logged and swallowed.
pub struct SystemBeep;

impl SystemBeep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemBeep {
    fn default() -> Self {
        Self::new()
    }
}

impl BeepChannel for SystemBeep {
    fn play(&mut self) {
        if let Err(e) = beep() {
            log::warn!("System beep failed: {}", e);
        }
    }
}

#[cfg(windows)]
fn beep() -> Result<()> {
    use std::process::Command;

    let output = Command::new("powershell")
        .args(["-NoProfile", "-Command", "[System.Media.SystemSounds]::Beep.Play()"])
        .output()?;
    if !output.status.success() {
        return Err(crate::error::BattwatchError::notification(format!(
            "powershell beep exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(not(windows))]
fn beep() -> Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}
