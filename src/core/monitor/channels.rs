//! Channel seams between the monitor engine and the outside world.
//!
//! The engine never talks to hardware or the desktop directly; it goes
//! through these traits so the platform adapters can be swapped for test
//! doubles.

use std::time::Duration;

use crate::error::Result;

use super::reading::BatteryReading;

/// Severity of an event journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

/// Source of battery samples. Reads may fail (sensor unplugged, platform
/// API hiccup); the engine decides what to do about it.
pub trait Sensor: Send {
    fn read(&mut self) -> Result<BatteryReading>;
}

/// Durable, user-visible event journal.
pub trait LogSink: Send {
    /// Append one entry carrying the monitor's sequence number.
    fn write(&mut self, message: &str, severity: Severity, sequence: u32) -> Result<()>;

    /// Discard all prior entries.
    fn clear(&mut self) -> Result<()>;
}

/// Desktop popup notifications.
pub trait PopupChannel: Send {
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Text-to-speech output. Speaking can fail outright (no synthesizer, no
/// audio device), so the engine has a fallback path.
pub trait SpeechChannel: Send {
    fn speak(&mut self, message: &str) -> Result<()>;
}

/// Audible system beep. Best-effort: implementations swallow failures.
pub trait BeepChannel: Send {
    fn play(&mut self);
}

/// Handle to the poll timer driving the tick loop. Rearming changes the
/// period; the first tick at the new period fires one full interval later,
/// never immediately.
pub trait PollTimer: Send {
    fn rearm(&mut self, interval: Duration);
}
