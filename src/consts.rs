pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Fixed values shared by the controller, the UI and the HTTP client,
    //! organized by functional area.

    // =============================================================================
    // SELECTION
    // =============================================================================

    /// City selected after the city list loads, when the list contains it.
    pub const DEFAULT_CITY: &str = "Delhi";

    // =============================================================================
    // FORECAST
    // =============================================================================

    /// Number of future hours requested per forecast call.
    pub const FORECAST_HOURS: u32 = 48;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the controller worker and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Command buffer size between the UI and the controller worker.
    /// Selections are coalesced by the worker, so this stays small.
    pub const COMMAND_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// Time allowed to establish a TCP connection to the API.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard appears.
        pub const SPLASH_DURATION_MS: u64 = 1500;

        /// Redraw and key-poll interval.
        pub const TICK_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn tick() -> Duration {
            Duration::from_millis(TICK_MS)
        }
    }
}
