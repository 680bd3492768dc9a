// Core business logic module

pub mod journal;
pub mod monitor;

// Re-export commonly used items
pub use journal::EventJournal;
pub use monitor::{BatteryMonitor, BatteryReading, MonitorRuntime};
