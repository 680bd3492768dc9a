//! Battery sensor backed by the platform power APIs.

use battery::units::ratio::percent;
use battery::{Manager, State};

use crate::core::monitor::{BatteryReading, Sensor};
use crate::error::{BattwatchError, Result};

/// Reads charge level and charging state from the first battery the
/// platform reports. Laptops with multiple packs are not aggregated.
///
/// The platform manager handle is not `Send`, so a fresh one is built for
/// every read instead of held in the sensor.
pub struct SystemBatterySensor;

impl SystemBatterySensor {
    /// Probes the power API once so a missing battery surfaces here rather
    /// than on the first tick.
    pub fn new() -> Result<Self> {
        let sensor = Self;
        sensor.first_battery()?;
        Ok(sensor)
    }

    fn first_battery(&self) -> Result<battery::Battery> {
        let manager = Manager::new()?;
        let mut batteries = manager.batteries()?;
        match batteries.next() {
            Some(battery) => Ok(battery?),
            None => Err(BattwatchError::sensor("no battery present")),
        }
    }
}

/// A non-finite charge level (seen when the platform reports a zero
/// full-charge capacity) is a sensor error, not a 0% reading.
fn charge_to_percentage(charge: f32) -> Result<u8> {
    if !charge.is_finite() {
        return Err(BattwatchError::sensor(format!(
            "battery reported a non-finite charge level: {}",
            charge
        )));
    }
    Ok(charge.round().clamp(0.0, 100.0) as u8)
}

impl Sensor for SystemBatterySensor {
    fn read(&mut self) -> Result<BatteryReading> {
        let battery = self.first_battery()?;
        let percentage = charge_to_percentage(battery.state_of_charge().get::<percent>())?;
        // Only an actively charging battery counts; Full on AC reads as
        // not-charging, same as a discharging one.
        let is_charging = battery.state() == State::Charging;
        Ok(BatteryReading::new(percentage, is_charging))
    }
}
