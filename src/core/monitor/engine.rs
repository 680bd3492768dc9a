//! The battery monitor state machine.
//!
//! One tick: sample the sensor, journal the charge state, fire whichever
//! alerts the state transitions call for, and adjust the poll cadence.
//! All side effects go through the injected channels.

use super::channels::{
    BeepChannel, LogSink, PollTimer, PopupChannel, Sensor, Severity, SpeechChannel,
};
use super::policy::{
    CHARGING_POLL_INTERVAL, FULL_CHARGE_PERCENT, INITIAL_SEQUENCE, LOW_BATTERY_PERCENT,
    SEQUENCE_BASE, SEQUENCE_CEILING, STANDBY_POLL_INTERVAL,
};

/// Mutable monitor state. Written only by the tick loop; everything here is
/// per-session bookkeeping, nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorState {
    /// Charging state derived from the last successful sample.
    pub is_charging: bool,
    /// A CHARGING entry has been journaled for the current plug-in session.
    pub charging_logged: bool,
    /// The low-battery alert has fired for the current discharge session.
    pub low_battery_notified: bool,
    /// The full-charge alert has fired for the current plug-in session.
    pub fully_charged_notified: bool,
    /// The timer is armed at the charging interval.
    pub fast_poll_active: bool,
    /// Sequence number the next journal entry will carry.
    pub event_sequence: u32,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self {
            is_charging: false,
            charging_logged: false,
            low_battery_notified: false,
            fully_charged_notified: false,
            fast_poll_active: false,
            event_sequence: INITIAL_SEQUENCE,
        }
    }
}

/// Adaptive polling battery monitor.
///
/// Every non-charging tick journals an ON STANDBY entry; the first charging
/// tick of a plug-in session journals a CHARGING entry. Crossing the low
/// threshold while discharging fires a popup and a beep once per discharge
/// session; hitting the full-charge mark while charging fires a popup and a
/// spoken announcement once per plug-in session. The timer runs at a short
/// interval while charging and a long one otherwise.
pub struct BatteryMonitor {
    state: MonitorState,
    sensor: Box<dyn Sensor>,
    journal: Box<dyn LogSink>,
    popup: Box<dyn PopupChannel>,
    speech: Box<dyn SpeechChannel>,
    beep: Box<dyn BeepChannel>,
    timer: Box<dyn PollTimer>,
}

impl BatteryMonitor {
    pub fn new(
        sensor: Box<dyn Sensor>,
        journal: Box<dyn LogSink>,
        popup: Box<dyn PopupChannel>,
        speech: Box<dyn SpeechChannel>,
        beep: Box<dyn BeepChannel>,
        timer: Box<dyn PollTimer>,
    ) -> Self {
        Self {
            state: MonitorState::default(),
            sensor,
            journal,
            popup,
            speech,
            beep,
            timer,
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Journal the service start and greet the user.
    pub fn announce_startup(&mut self) {
        self.write_entry(Severity::Info, "Battery monitor service started.");
        self.send_popup("Service started successfully.");
    }

    /// Journal the service stop. Called after the last tick has run.
    pub fn announce_shutdown(&mut self) {
        self.write_entry(Severity::Info, "Battery monitor service stopped.");
    }

    /// Run one poll cycle.
    ///
    /// A failed sensor read skips the whole tick: no journal entry, no flag
    /// or timer changes. A fabricated reading could fire a spurious
    /// low-battery alert, so none is fabricated.
    pub fn on_tick(&mut self) {
        let reading = match self.sensor.read() {
            Ok(reading) => reading,
            Err(e) => {
                log::warn!("Battery read failed, skipping tick: {}", e);
                return;
            }
        };

        log::debug!(
            "Battery at {}%, charging: {}",
            reading.percentage,
            reading.is_charging
        );
        self.state.is_charging = reading.is_charging;

        // Housekeeping before this tick writes anything: once the sequence
        // hits the ceiling, the journal starts over from the base.
        if self.state.event_sequence >= SEQUENCE_CEILING {
            if let Err(e) = self.journal.clear() {
                log::error!("Failed to clear event journal: {}", e);
            }
            self.state.event_sequence = SEQUENCE_BASE;
        }

        if !reading.is_charging {
            self.state.charging_logged = false;
            self.write_entry(
                Severity::Info,
                &format!(
                    "Laptop battery is ON STANDBY with {}% remaining.",
                    reading.percentage
                ),
            );
        } else if !self.state.charging_logged {
            self.state.charging_logged = true;
            self.write_entry(
                Severity::Info,
                &format!(
                    "Laptop battery is CHARGING with {}% remaining.",
                    reading.percentage
                ),
            );
        }

        if !reading.is_charging {
            if reading.percentage <= LOW_BATTERY_PERCENT && !self.state.low_battery_notified {
                self.state.low_battery_notified = true;
                self.write_entry(
                    Severity::Info,
                    &format!(
                        "Low battery, {}% remaining. Please charge.",
                        reading.percentage
                    ),
                );
                self.send_popup("Low battery, please plug in your charger.");
                self.beep.play();
            } else {
                self.state.fully_charged_notified = false;
                if reading.percentage > LOW_BATTERY_PERCENT {
                    // Recovered without a charge session: re-arm the alert.
                    self.state.low_battery_notified = false;
                }
                if self.state.fast_poll_active {
                    self.state.fast_poll_active = false;
                    self.timer.rearm(STANDBY_POLL_INTERVAL);
                }
            }
        } else {
            if !self.state.fast_poll_active {
                self.state.fast_poll_active = true;
                self.timer.rearm(CHARGING_POLL_INTERVAL);
            }
            if reading.percentage == FULL_CHARGE_PERCENT && !self.state.fully_charged_notified {
                self.state.fully_charged_notified = true;
                self.send_popup("Your laptop battery is fully charged. Please unplug your charger.");
                if let Err(e) = self.speech.speak("Battery Fully Charged") {
                    self.write_entry(
                        Severity::Error,
                        &format!("Text to speech failed: {}. Falling back to beep.", e),
                    );
                    self.beep.play();
                }
            }
        }
    }

    fn next_sequence(&mut self) -> u32 {
        let sequence = self.state.event_sequence;
        self.state.event_sequence += 1;
        sequence
    }

    fn write_entry(&mut self, severity: Severity, message: &str) {
        let sequence = self.next_sequence();
        if let Err(e) = self.journal.write(message, severity, sequence) {
            log::error!("Failed to write journal entry #{}: {}", sequence, e);
        }
    }

    fn send_popup(&mut self, message: &str) {
        if let Err(e) = self.popup.notify(message) {
            log::warn!("Popup notification failed: {}", e);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_event_sequence(&mut self, sequence: u32) {
        self.state.event_sequence = sequence;
    }
}
