// Battwatch Library - Public API

// Re-export error types
pub mod error;
pub use error::{BattwatchError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::journal::EventJournal;
pub use crate::core::monitor::{BatteryMonitor, BatteryReading, MonitorRuntime};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
