//! Status command handler.
//!
//! One-shot battery read for scripting and quick checks.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;
use serde::Serialize;

use crate::core::monitor::policy::{FULL_CHARGE_PERCENT, LOW_BATTERY_PERCENT};
use crate::core::monitor::{BatteryReading, Sensor};
use crate::platform::SystemBatterySensor;

#[derive(Debug, Serialize)]
struct StatusReport {
    percentage: u8,
    charging: bool,
    low_battery: bool,
    fully_charged: bool,
}

fn build_report(reading: BatteryReading) -> StatusReport {
    StatusReport {
        percentage: reading.percentage,
        charging: reading.is_charging,
        low_battery: !reading.is_charging && reading.percentage <= LOW_BATTERY_PERCENT,
        fully_charged: reading.is_charging && reading.percentage == FULL_CHARGE_PERCENT,
    }
}

/// Execute the status command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut sensor = SystemBatterySensor::new().context("Failed to open battery sensor")?;
    let reading = sensor.read().context("Failed to read battery state")?;
    let report = build_report(reading);

    // JSON output mode (for scripting)
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    let state = if report.charging {
        "CHARGING".green()
    } else {
        "ON STANDBY".cyan()
    };
    println!("Battery: {}% ({})", report.percentage, state);
    if report.low_battery {
        println!("{}", "Low battery, please plug in your charger.".red().bold());
    }
    if report.fully_charged {
        println!(
            "{}",
            "Your laptop battery is fully charged. Please unplug your charger.".green()
        );
    }

    Ok(())
}
