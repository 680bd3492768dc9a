//! The async tick loop driving a [`BatteryMonitor`].

use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::channels::PollTimer;
use super::engine::BatteryMonitor;

/// Timer handle handed to the engine. Rearming publishes the new period;
/// the tick loop rebuilds its interval when it sees the change.
pub(crate) struct IntervalHandle {
    tx: watch::Sender<Duration>,
}

impl IntervalHandle {
    pub(crate) fn new(tx: watch::Sender<Duration>) -> Self {
        Self { tx }
    }
}

impl PollTimer for IntervalHandle {
    fn rearm(&mut self, interval: Duration) {
        // Fails only when the tick loop is gone, which also makes it moot.
        let _ = self.tx.send(interval);
    }
}

/// Task that polls the battery and runs the monitor until shutdown.
///
/// The first tick fires one full period after start, matching rearm
/// semantics. A rearm takes effect on the next loop turn: the interval is
/// rebuilt so the next tick lands one full new period later.
pub(crate) async fn monitor_task(
    mut monitor: BatteryMonitor,
    mut interval_rx: watch::Receiver<Duration>,
    mut shutdown: broadcast::Receiver<()>,
) {
    monitor.announce_startup();

    let mut period = *interval_rx.borrow_and_update();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                monitor.on_tick();
            }
            changed = interval_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                period = *interval_rx.borrow_and_update();
                log::debug!("Poll interval rearmed to {:?}", period);
                ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            }
            _ = shutdown.recv() => {
                break;
            }
        }
    }

    monitor.announce_shutdown();
}
