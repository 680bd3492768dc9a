//! Tokio runtime owning the battery monitor task.
//!
//! This module provides the async runtime that runs the tick loop in the
//! background while the caller's thread stays free.

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use super::channels::{BeepChannel, LogSink, PopupChannel, Sensor, SpeechChannel};
use super::engine::BatteryMonitor;
use super::policy::poll_interval;
use super::task::{monitor_task, IntervalHandle};

/// Wrapper around the Tokio runtime for the monitor task.
///
/// Construction starts monitoring; [`MonitorRuntime::stop`] shuts it down
/// and waits for the loop to finish, so no tick runs after it returns.
pub struct MonitorRuntime {
    /// Shutdown signal sender
    shutdown_tx: broadcast::Sender<()>,

    /// Handle to the monitor task (joined on stop)
    task: Option<JoinHandle<()>>,

    /// Handle to the runtime (for shutdown)
    runtime: tokio::runtime::Runtime,
}

impl MonitorRuntime {
    /// Create the runtime and start monitoring with the given channels.
    ///
    /// The timer starts at the standby interval; the engine rearms it as
    /// the charging state changes.
    pub fn start(
        sensor: Box<dyn Sensor>,
        journal: Box<dyn LogSink>,
        popup: Box<dyn PopupChannel>,
        speech: Box<dyn SpeechChannel>,
        beep: Box<dyn BeepChannel>,
    ) -> anyhow::Result<Self> {
        log::info!("Starting battery monitor runtime");

        // Create Tokio runtime with 2 worker threads
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("battwatch-monitor")
            .build()?;

        // A fresh monitor is presumed not charging until the first sample.
        let (interval_tx, interval_rx) = watch::channel(poll_interval(false));
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let monitor = BatteryMonitor::new(
            sensor,
            journal,
            popup,
            speech,
            beep,
            Box::new(IntervalHandle::new(interval_tx)),
        );

        let task = runtime.spawn(monitor_task(monitor, interval_rx, shutdown_tx.subscribe()));

        Ok(Self {
            shutdown_tx,
            task: Some(task),
            runtime,
        })
    }

    /// Shutdown gracefully: signal the loop, then wait for it to write its
    /// shutdown entry and exit.
    pub fn stop(mut self) {
        log::info!("Stopping battery monitor runtime");
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            if let Err(e) = self.runtime.block_on(task) {
                log::error!("Monitor task failed during shutdown: {}", e);
            }
        }
        // Runtime shuts down when dropped
    }
}
