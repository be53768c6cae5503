//! Clock label producer
//!
//! An owned periodic task that formats the local time and posts it to the
//! UI loop. It stops when cancelled or dropped.

use crate::events::DashboardEvent;
use crate::locale::Locale;
use chrono::Local;
use log::{debug, info};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Current local time formatted for `locale`.
pub fn current_label(locale: Locale) -> String {
    locale.format_time(Local::now().time())
}

/// Name of the viewer's time zone, if the host exposes one.
pub fn local_timezone() -> Option<String> {
    iana_time_zone::get_timezone().ok()
}

/// Periodic clock tick task with an explicit start/stop lifecycle.
#[derive(Debug)]
pub struct ClockTicker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Spawns the ticker. The first label is sent immediately, then one per `period`.
    pub fn start(locale: Locale, period: Duration, events: mpsc::Sender<DashboardEvent>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let label = current_label(locale);
                        debug!("Clock tick: {}", label);
                        if events.send(DashboardEvent::ClockTick(label)).await.is_err() {
                            // UI loop is gone
                            break;
                        }
                    }
                }
            }
        });
        info!("Clock ticker started ({:?} interval)", period);
        Self { cancel, handle }
    }

    /// Stops the ticker. Safe to call more than once.
    pub fn stop(&self) {
        if !self.cancel.is_cancelled() {
            info!("Clock ticker stopped");
            self.cancel.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled() && !self.handle.is_finished()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    // The first label is emitted right away, the next only after a full period.
    async fn test_emits_immediately_then_every_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = ClockTicker::start(Locale::EnGb, Duration::from_secs(60), tx);

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, DashboardEvent::ClockTick(_)));

        let start = tokio::time::Instant::now();
        tokio::time::advance(Duration::from_secs(59)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        let second = rx.recv().await.unwrap();
        assert!(matches!(second, DashboardEvent::ClockTick(_)));
        assert!(start.elapsed() >= Duration::from_secs(60));

        ticker.stop();
    }

    #[tokio::test(start_paused = true)]
    // After stop no further ticks arrive and the task winds down.
    async fn test_stop_ends_periodic_work() {
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = ClockTicker::start(Locale::EnIn, Duration::from_secs(60), tx);
        let _ = rx.recv().await.unwrap();

        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());

        // Sender is dropped with the task, so the channel closes.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    // Dropping the ticker cancels it as well.
    async fn test_drop_cancels_task() {
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = ClockTicker::start(Locale::EnUs, Duration::from_secs(60), tx);
        let _ = rx.recv().await.unwrap();
        drop(ticker);
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_label_matches_locale_shape() {
        let label = current_label(Locale::EnGb);
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
