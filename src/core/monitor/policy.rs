//! Fixed polling cadence, alert thresholds, and journal sequence bounds.

use std::time::Duration;

/// Poll period while idle or discharging.
pub const STANDBY_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Poll period while charging. Short, so the exact full-charge mark is not
/// missed between samples.
pub const CHARGING_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Discharging at or below this percentage is a low battery.
pub const LOW_BATTERY_PERCENT: u8 = 40;

/// Charging at exactly this percentage triggers the full-charge alert.
pub const FULL_CHARGE_PERCENT: u8 = 94;

/// Journal sequence number at which the journal is cleared and numbering
/// restarts from [`SEQUENCE_BASE`].
pub const SEQUENCE_CEILING: u32 = 9999;

/// Sequence number after a ceiling reset.
pub const SEQUENCE_BASE: u32 = 0;

/// Sequence number of the first entry a fresh monitor writes.
pub const INITIAL_SEQUENCE: u32 = 1;

/// Poll period matching the given charging state.
pub fn poll_interval(charging: bool) -> Duration {
    if charging {
        CHARGING_POLL_INTERVAL
    } else {
        STANDBY_POLL_INTERVAL
    }
}
