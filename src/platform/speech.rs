//! Text-to-speech output.

use std::process::Command;

use crate::core::monitor::SpeechChannel;
use crate::error::{BattwatchError, Result};

/// Speech channel backed by the platform synthesizer. Speaking fails when
/// no synthesizer or audio device is available; the engine handles that.
pub struct SpeechSynth;

impl SpeechSynth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpeechSynth {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechChannel for SpeechSynth {
    fn speak(&mut self, message: &str) -> Result<()> {
        speak_text(message)
    }
}

#[cfg(windows)]
fn speak_text(text: &str) -> Result<()> {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         $synth = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
         $synth.Volume = 5; $synth.Rate = 1; \
         $synth.Speak('{}')",
        text.replace('\'', "''")
    );
    let output = Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .output()?;
    if !output.status.success() {
        return Err(BattwatchError::speech(format!(
            "powershell synthesizer exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn speak_text(text: &str) -> Result<()> {
    let output = Command::new("say").arg(text).output()?;
    if !output.status.success() {
        return Err(BattwatchError::speech(format!(
            "say exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn speak_text(text: &str) -> Result<()> {
    let output = Command::new("espeak").arg(text).output()?;
    if !output.status.success() {
        return Err(BattwatchError::speech(format!(
            "espeak exited with {}",
            output.status
        )));
    }
    Ok(())
}

#[cfg(not(any(windows, unix)))]
fn speak_text(_text: &str) -> Result<()> {
    Err(BattwatchError::speech("no speech channel on this platform"))
}
