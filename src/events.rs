//! Event System
//!
//! Events posted by background timer tasks to the UI loop

use std::fmt::Display;

/// Work completed by a timer task, applied by the UI loop to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// A freshly formatted clock label.
    ClockTick(String),
    /// The notification scheduled under this generation has expired.
    NotificationExpired(u64),
}

impl Display for DashboardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardEvent::ClockTick(label) => write!(f, "clock tick {}", label),
            DashboardEvent::NotificationExpired(generation) => {
                write!(f, "notification #{} expired", generation)
            }
        }
    }
}
