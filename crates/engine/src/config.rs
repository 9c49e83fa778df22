//! Engine configuration parameters.
//!
//! These only control pacing for front ends. The move rules and the
//! opponent heuristic are fixed.

use std::time::Duration;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Pause before the opponent's reply.
    /// - `Some(d)`: the engine reports the reply as pending and the front end
    ///   calls `Engine::play_opponent_turn` once `d` has passed
    /// - `None`: the engine plays the reply inside the triggering call
    pub reply_delay: Option<Duration>,

    /// How long a front end shows the "pick a player" advisory.
    pub warning_duration: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply_delay: Some(Duration::from_millis(500)),
            warning_duration: Duration::from_millis(1500),
        }
    }
}

impl EngineConfig {
    /// Create a config where the opponent replies immediately.
    pub fn synchronous() -> Self {
        Self {
            reply_delay: None,
            ..Default::default()
        }
    }

    /// Create a config with the given reply pause. Zero means synchronous.
    pub fn with_reply_delay(delay: Duration) -> Self {
        Self {
            reply_delay: (!delay.is_zero()).then_some(delay),
            ..Default::default()
        }
    }
}
