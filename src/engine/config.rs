//! Engine configuration values

use crate::traits::ConfigError;

/// Default requested window size
pub const DEFAULT_WINDOW_SIZE: u32 = 1024;

/// Settings supplied by the host at configuration time
///
/// With the `serde` feature every field falls back to its default when
/// missing, so a partial configuration deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Requested window size. Integer kinds round it down to a power of two.
    pub window_size: u32,
    /// Cycles to let pass before the first sample is taken
    pub start_cycle: u32,
    /// Track extrema over all history instead of the current window
    pub infinite_extrema: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            start_cycle: 0,
            infinite_extrema: false,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_size(mut self, window_size: u32) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_start_cycle(mut self, start_cycle: u32) -> Self {
        self.start_cycle = start_cycle;
        self
    }

    pub fn with_infinite_extrema(mut self, infinite_extrema: bool) -> Self {
        self.infinite_extrema = infinite_extrema;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::InvalidWindowSize);
        }
        Ok(())
    }
}
