//! Shared constants for end-to-end tests

/// Maximum time to wait for a spawned server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between server readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Timeout for individual test requests
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Messages with a known reading under the keyword backend, so tests
// against a spawned server stay deterministic.

/// Hits the joy keyword table: joy at 0.75
pub const HAPPY_MESSAGE: &str = "I am so happy and excited today!";

/// Hits the negated-wellbeing shortcut: sadness at 0.8
pub const NEGATIVE_MESSAGE: &str = "I am not feeling good today";

/// Hits no keyword at all: neutral at 0.6
pub const NEUTRAL_MESSAGE: &str = "The meeting is at noon.";

/// Classifies as joy ("good") while carrying a negative phrase ("hate"),
/// which drives resolution into its sadness fallback
pub const CORRECTED_MESSAGE: &str = "I hate how good this is";

/// The fixed reply returned whenever sadness resolves on negative phrasing
pub const SADNESS_OVERRIDE_REPLY: &str =
    "I notice you mentioned not feeling good. I'm here to support you through this. 💙";
