pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed timings, seed values and messages used
    //! by the front-desk dashboard, organized by functional area.

    // =============================================================================
    // EVENT CONFIGURATION
    // =============================================================================

    /// Maximum number of buffered events between timer tasks and the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // TIMING CONFIGURATION
    // =============================================================================

    /// Timer configuration for the clock label and the notification banner
    pub mod timing {
        use std::time::Duration;

        /// Interval between clock label refreshes (milliseconds)
        pub const CLOCK_TICK_MS: u64 = 60_000;

        /// Lifetime of a notification before it clears itself (milliseconds)
        pub const NOTIFICATION_TTL_MS: u64 = 3_000;

        /// How long the splash screen stays up before the dashboard (milliseconds)
        pub const SPLASH_MS: u64 = 2_000;

        /// Keyboard poll timeout per UI frame (milliseconds)
        pub const INPUT_POLL_MS: u64 = 100;

        /// Helper function to get the clock tick interval
        pub const fn clock_tick() -> Duration {
            Duration::from_millis(CLOCK_TICK_MS)
        }

        /// Helper function to get the notification lifetime
        pub const fn notification_ttl() -> Duration {
            Duration::from_millis(NOTIFICATION_TTL_MS)
        }

        pub const fn splash() -> Duration {
            Duration::from_millis(SPLASH_MS)
        }

        pub const fn input_poll() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }
    }

    // =============================================================================
    // SEED CONFIGURATION
    // =============================================================================

    /// Token shown as current when a session starts
    pub const INITIAL_TOKEN: u64 = 45;

    /// Recipient count reported by a simulated alert broadcast
    pub const ALERT_RECIPIENTS: u32 = 127;

    // =============================================================================
    // CONFIRMATION MESSAGES
    // =============================================================================

    /// Fixed notification texts emitted by the dashboard transitions
    pub mod messages {
        pub const DOCTOR_STATUS_UPDATED: &str = "Doctor status updated";
        pub const LAB_STATUS_UPDATED: &str = "Lab status updated";
        pub const QUEUE_STARTED: &str = "Queue started";
        pub const QUEUE_PAUSED: &str = "Queue paused";
        pub const TOKEN_SKIPPED: &str = "Token skipped";
        pub const OVERRIDE_APPLIED: &str = "Override applied successfully";

        /// Notification for a confirmed alert broadcast
        pub fn alert_sent() -> String {
            format!("Alert sent to {} patients", super::ALERT_RECIPIENTS)
        }
    }
}
