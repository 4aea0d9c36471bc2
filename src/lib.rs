//! # Windowstats
//!
//! Sliding-window online statistics for real-time control loops.
//!
//! Windowstats keeps the average, root mean square, standard deviation,
//! minimum and maximum of the most recent samples of a signal, updating in
//! constant time per sample whatever the window size.
//!
//! ## Features
//!
//! - **Constant-time updates**: running sums are adjusted by the evicted and
//!   the incoming sample; extrema are rescanned only when the evicted sample
//!   was the extremum
//! - **Ten numeric kinds**: signed and unsigned 8 to 64-bit integers, 32 and
//!   64-bit floats
//! - **Division-free hot path**: integer windows are powers of two and divide
//!   by shifting, float windows multiply by a reciprocal
//! - **Windowed or infinite extrema**: min/max over the window, or over all
//!   history
//! - **Host engine**: a cycle-driven wrapper that reads and writes host signal
//!   memory
//!
//! ## Quick Start
//!
//! ```rust
//! use windowstats::prelude::*;
//!
//! let mut stats = WindowStatistics::<f64>::new(4).unwrap();
//! for value in [6.0, 2.0, 2.0, 4.0] {
//!     stats.push(value, false).unwrap();
//! }
//! assert_eq!(stats.average(), 3.5);
//! ```
//!
//! ## Warm-up bias
//!
//! Aggregates always divide by the full window size. Until `capacity` samples
//! have been pushed the unfilled slots count as zeros, so early averages lean
//! toward zero. Check [`WindowStatistics::is_full`] before trusting them.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of configuration and snapshots

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod engine;
pub mod kind;
pub mod math;
pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::engine::{EngineConfig, SignalDescriptor, StatisticsEngine};
    pub use crate::kind::NumericKind;
    pub use crate::statistics::{Sample, WindowSnapshot, WindowStatistics};
}

pub use engine::{EngineConfig, StatisticsEngine};
pub use kind::NumericKind;
pub use statistics::WindowStatistics;
