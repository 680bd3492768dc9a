use serde::{Deserialize, Serialize};

/// A single battery sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// Charge level, 0-100
    pub percentage: u8,
    /// True while the platform reports the battery as charging
    pub is_charging: bool,
}

impl BatteryReading {
    pub fn new(percentage: u8, is_charging: bool) -> Self {
        Self {
            percentage,
            is_charging,
        }
    }
}
