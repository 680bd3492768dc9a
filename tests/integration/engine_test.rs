use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use battwatch::core::monitor::policy::{CHARGING_POLL_INTERVAL, STANDBY_POLL_INTERVAL};
use battwatch::core::monitor::{
    BatteryMonitor, BatteryReading, BeepChannel, LogSink, MonitorRuntime, PollTimer, PopupChannel,
    Sensor, Severity, SpeechChannel,
};
use battwatch::error::{BattwatchError, Result};
use battwatch::EventJournal;
use tempfile::TempDir;

/// Everything the monitor did, in one shared transcript.
#[derive(Clone, Default)]
struct Transcript {
    inner: Arc<Mutex<TranscriptInner>>,
}

#[derive(Default)]
struct TranscriptInner {
    entries: Vec<(String, Severity, u32)>,
    popups: Vec<String>,
    spoken: Vec<String>,
    beeps: usize,
    rearms: Vec<Duration>,
}

impl Transcript {
    fn entry_messages(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .iter()
            .map(|(m, _, _)| m.clone())
            .collect()
    }

    fn popups(&self) -> Vec<String> {
        self.inner.lock().unwrap().popups.clone()
    }

    fn spoken(&self) -> Vec<String> {
        self.inner.lock().unwrap().spoken.clone()
    }

    fn beeps(&self) -> usize {
        self.inner.lock().unwrap().beeps
    }

    fn rearms(&self) -> Vec<Duration> {
        self.inner.lock().unwrap().rearms.clone()
    }

    fn error_entries(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .iter()
            .filter(|(_, severity, _)| *severity == Severity::Error)
            .map(|(m, _, _)| m.clone())
            .collect()
    }
}

struct FakeSensor(VecDeque<BatteryReading>);

impl Sensor for FakeSensor {
    fn read(&mut self) -> Result<BatteryReading> {
        self.0
            .pop_front()
            .ok_or_else(|| BattwatchError::sensor("script exhausted"))
    }
}

struct FakeJournal(Transcript);

impl LogSink for FakeJournal {
    fn write(&mut self, message: &str, severity: Severity, sequence: u32) -> Result<()> {
        self.0
            .inner
            .lock()
            .unwrap()
            .entries
            .push((message.to_string(), severity, sequence));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.0.inner.lock().unwrap().entries.clear();
        Ok(())
    }
}

struct FakePopup(Transcript);

impl PopupChannel for FakePopup {
    fn notify(&mut self, message: &str) -> Result<()> {
        self.0.inner.lock().unwrap().popups.push(message.to_string());
        Ok(())
    }
}

struct FakeSpeech {
    transcript: Transcript,
    fail: bool,
}

impl SpeechChannel for FakeSpeech {
    fn speak(&mut self, message: &str) -> Result<()> {
        if self.fail {
            return Err(BattwatchError::speech("synthesizer unavailable"));
        }
        self.transcript
            .inner
            .lock()
            .unwrap()
            .spoken
            .push(message.to_string());
        Ok(())
    }
}

struct FakeBeep(Transcript);

impl BeepChannel for FakeBeep {
    fn play(&mut self) {
        self.0.inner.lock().unwrap().beeps += 1;
    }
}

struct FakeTimer(Transcript);

impl PollTimer for FakeTimer {
    fn rearm(&mut self, interval: Duration) {
        self.0.inner.lock().unwrap().rearms.push(interval);
    }
}

fn monitor_for(readings: &[(u8, bool)], speech_fails: bool) -> (BatteryMonitor, Transcript) {
    let transcript = Transcript::default();
    let script = readings
        .iter()
        .map(|&(percentage, is_charging)| BatteryReading::new(percentage, is_charging))
        .collect();
    let monitor = BatteryMonitor::new(
        Box::new(FakeSensor(script)),
        Box::new(FakeJournal(transcript.clone())),
        Box::new(FakePopup(transcript.clone())),
        Box::new(FakeSpeech {
            transcript: transcript.clone(),
            fail: speech_fails,
        }),
        Box::new(FakeBeep(transcript.clone())),
        Box::new(FakeTimer(transcript.clone())),
    );
    (monitor, transcript)
}

#[test]
fn test_discharge_run_journals_every_tick() {
    let (mut monitor, transcript) = monitor_for(&[(80, false), (79, false), (79, false)], false);

    for _ in 0..3 {
        monitor.on_tick();
    }

    assert_eq!(
        transcript.entry_messages(),
        vec![
            "Laptop battery is ON STANDBY with 80% remaining.",
            "Laptop battery is ON STANDBY with 79% remaining.",
            "Laptop battery is ON STANDBY with 79% remaining.",
        ]
    );
    assert!(transcript.popups().is_empty());
    assert_eq!(transcript.beeps(), 0);
    assert!(transcript.rearms().is_empty());
}

#[test]
fn test_low_battery_run_alerts_once() {
    let (mut monitor, transcript) = monitor_for(&[(42, false), (40, false), (39, false)], false);

    for _ in 0..3 {
        monitor.on_tick();
    }

    assert_eq!(
        transcript.popups(),
        vec!["Low battery, please plug in your charger."]
    );
    assert_eq!(transcript.beeps(), 1);
    assert!(monitor.state().low_battery_notified);
}

#[test]
fn test_charging_run_logs_once_and_speeds_up_polling() {
    let (mut monitor, transcript) = monitor_for(&[(50, false), (50, true), (51, true)], false);

    for _ in 0..3 {
        monitor.on_tick();
    }

    let charging_entries = transcript
        .entry_messages()
        .iter()
        .filter(|m| m.contains("CHARGING"))
        .count();
    assert_eq!(charging_entries, 1);
    assert_eq!(transcript.rearms(), vec![CHARGING_POLL_INTERVAL]);
}

#[test]
fn test_full_charge_run_with_speech_fallback() {
    let (mut monitor, transcript) = monitor_for(&[(93, true), (94, true), (94, false)], true);

    for _ in 0..3 {
        monitor.on_tick();
    }

    assert_eq!(
        transcript.popups(),
        vec!["Your laptop battery is fully charged. Please unplug your charger."]
    );
    assert!(transcript.spoken().is_empty());
    assert_eq!(transcript.beeps(), 1);
    assert_eq!(transcript.error_entries().len(), 1);
    assert!(transcript.error_entries()[0].starts_with("Text to speech failed:"));

    // The unplug tick journals standby and falls back to the slow poll.
    assert!(transcript
        .entry_messages()
        .iter()
        .any(|m| m == "Laptop battery is ON STANDBY with 94% remaining."));
    assert_eq!(
        transcript.rearms(),
        vec![CHARGING_POLL_INTERVAL, STANDBY_POLL_INTERVAL]
    );
}

#[test]
fn test_full_charge_run_with_working_speech() {
    let (mut monitor, transcript) = monitor_for(&[(94, true)], false);

    monitor.on_tick();

    assert_eq!(transcript.spoken(), vec!["Battery Fully Charged"]);
    assert_eq!(transcript.beeps(), 0);
    assert!(transcript.error_entries().is_empty());
}

#[test]
fn test_runtime_lifecycle_writes_real_journal() {
    let dir = TempDir::new().unwrap();
    let journal_path = dir.path().join("events.log");
    let transcript = Transcript::default();

    let runtime = MonitorRuntime::start(
        Box::new(FakeSensor(VecDeque::new())),
        Box::new(EventJournal::new(journal_path.clone())),
        Box::new(FakePopup(transcript.clone())),
        Box::new(FakeSpeech {
            transcript: transcript.clone(),
            fail: false,
        }),
        Box::new(FakeBeep(transcript.clone())),
    )
    .expect("runtime should start");

    std::thread::sleep(Duration::from_millis(100));
    runtime.stop();

    let journal = EventJournal::new(journal_path);
    let lines = journal.tail(10).unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("#0001 INFO Battery monitor service started."));
    assert!(lines[1].contains("#0002 INFO Battery monitor service stopped."));
    assert_eq!(transcript.popups(), vec!["Service started successfully."]);
}
