//! Single-slot notification banner with an owned expiry timer

use crate::events::DashboardEvent;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// A message on screen, and the instant it clears itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Holds at most one notification and the timer that will clear it.
///
/// Each `show` aborts the previous timer and tags the new one with a fresh
/// generation; an expiry carrying an older generation is ignored.
#[derive(Debug)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
    ttl: Duration,
    timer: Option<JoinHandle<()>>,
    events: mpsc::Sender<DashboardEvent>,
}

impl NotificationSlot {
    pub fn new(ttl: Duration, events: mpsc::Sender<DashboardEvent>) -> Self {
        Self {
            current: None,
            generation: 0,
            ttl,
            timer: None,
            events,
        }
    }

    /// Replaces the current notification and reschedules the clear.
    pub fn show(&mut self, message: impl Into<String>) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let expires_at = Instant::now() + self.ttl;
        let message = message.into();
        debug!("Notification #{}: {}", generation, message);
        self.current = Some(Notification {
            message,
            expires_at,
        });

        let events = self.events.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            let _ = events
                .send(DashboardEvent::NotificationExpired(generation))
                .await;
        }));
    }

    /// Clears the slot if `generation` is the latest one. Returns whether it cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            debug!("Ignoring stale notification expiry #{}", generation);
            return false;
        }
        if let Some(expired) = self.current.take() {
            let late = Instant::now().saturating_duration_since(expired.expires_at);
            debug!("Notification #{} expired ({:?} late)", generation, late);
        }
        self.timer = None;
        true
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for NotificationSlot {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
