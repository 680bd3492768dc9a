// Platform-specific code module

pub mod notify;
pub mod sensor;
pub mod sound;
pub mod speech;

// Re-exports para imports limpios
pub use notify::DesktopPopup;
pub use sensor::SystemBatterySensor;
pub use sound::SystemBeep;
pub use speech::SpeechSynth;
