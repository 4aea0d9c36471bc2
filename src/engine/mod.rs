//! Cycle-driven engine around a statistics window
//!
//! The engine sits between a real-time host and one
//! [`WindowStatistics`](crate::statistics::WindowStatistics). At setup it
//! checks the host's signal declarations and picks the numeric kind once;
//! afterwards every cycle reads one sample from host memory and writes the
//! derived aggregates back.
//!
//! # Example
//!
//! ```
//! use windowstats::engine::{EngineConfig, SignalDescriptor, StatisticsEngine};
//!
//! let config = EngineConfig::new()
//!     .with_window_size(8)
//!     .with_start_cycle(2);
//! let mut engine = StatisticsEngine::new(config);
//!
//! engine
//!     .setup(
//!         &[SignalDescriptor::scalar("Speed", "uint32")],
//!         &[SignalDescriptor::scalar("SpeedAvg", "uint32")],
//!     )
//!     .unwrap();
//!
//! let mut avg = [0u8; 4];
//! for cycle in 0..20u32 {
//!     engine.execute(&cycle.to_ne_bytes(), &mut [&mut avg]).unwrap();
//! }
//! println!("average speed: {}", u32::from_ne_bytes(avg));
//!
//! // On a state transition
//! engine.reset().unwrap();
//! ```

mod config;
mod signal;
mod statistics_engine;

pub use config::{EngineConfig, DEFAULT_WINDOW_SIZE};
pub use signal::SignalDescriptor;
pub use statistics_engine::{StatisticsEngine, MAX_OUTPUTS};
