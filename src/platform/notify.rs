//! Desktop popup notifications.

use std::process::Command;

use crate::core::monitor::PopupChannel;
use crate::error::{BattwatchError, Result};

/// Tag prepended to every popup so notifications identify their origin.
const SERVICE_TAG: &str = "[battwatch]";

/// Popup channel backed by the platform's notification command.
pub struct DesktopPopup;

impl DesktopPopup {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupChannel for DesktopPopup {
    fn notify(&mut self, message: &str) -> Result<()> {
        send_popup(&tagged(message))
    }
}

fn tagged(message: &str) -> String {
    format!("{} {}", SERVICE_TAG, message)
}

#[cfg(windows)]
fn send_popup(text: &str) -> Result<()> {
    let output = Command::new("msg").args(["*", text]).output()?;
    if !output.status.success() {
        return Err(BattwatchError::notification(format!(
            "msg exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn send_popup(text: &str) -> Result<()> {
    let script = format!("display notification \"{}\" with title \"battwatch\"", text);
    let output = Command::new("osascript").args(["-e", &script]).output()?;
    if !output.status.success() {
        return Err(BattwatchError::notification(format!(
            "osascript exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn send_popup(text: &str) -> Result<()> {
    let output = Command::new("notify-send").args(["battwatch", text]).output()?;
    if !output.status.success() {
        return Err(BattwatchError::notification(format!(
            "notify-send exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(not(any(windows, unix)))]
fn send_popup(_text: &str) -> Result<()> {
    Err(BattwatchError::notification(
        "no popup channel on this platform",
    ))
}
