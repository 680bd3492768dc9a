//! Battery monitoring core functionality.
//!
//! This module provides the adaptive polling state machine that samples the
//! battery sensor and drives user notifications through injected channels.

pub mod channels;
mod engine;
pub mod policy;
mod reading;
mod runtime;
mod task;


pub use channels::{
    BeepChannel, LogSink, PollTimer, PopupChannel, Sensor, Severity, SpeechChannel,
};
pub use engine::{BatteryMonitor, MonitorState};
pub use reading::BatteryReading;
pub use runtime::MonitorRuntime;
