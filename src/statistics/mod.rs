//! Sliding-window statistics over a bounded history
//!
//! This module provides [`WindowStatistics`], which keeps the average, root
//! mean square, standard deviation, sum, minimum and maximum of the most
//! recent samples up to date in constant time per sample, and the [`Sample`]
//! trait carrying the per-kind numeric policy.
//!
//! # Example
//!
//! ```
//! use windowstats::statistics::WindowStatistics;
//!
//! let mut stats = WindowStatistics::<f64>::new(4).unwrap();
//!
//! for value in [0.0, 1.0, 4.0, 9.0] {
//!     stats.push(value, false).unwrap();
//! }
//!
//! println!("Average: {}", stats.average());
//! println!("Stddev: {}", stats.standard_deviation());
//! println!("Min: {}", stats.min());
//! println!("Max: {}", stats.max());
//! ```

mod sample;
mod window;

pub use sample::{power_of_two_floor, Sample};
pub use window::{WindowSnapshot, WindowStatistics};

use crate::kind::NumericKind;
use crate::traits::{BufferError, WindowedStatistic};

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Create a kind-erased window for `kind`
///
/// This is the single place a numeric kind is turned into a concrete
/// [`WindowStatistics`] instantiation.
pub fn window_for_kind(
    kind: NumericKind,
    requested: u32,
) -> Result<Box<dyn WindowedStatistic>, BufferError> {
    fn boxed<T: Sample>(requested: u32) -> Result<Box<dyn WindowedStatistic>, BufferError> {
        Ok(Box::new(WindowStatistics::<T>::new(requested)?))
    }

    match kind {
        NumericKind::Int8 => boxed::<i8>(requested),
        NumericKind::Int16 => boxed::<i16>(requested),
        NumericKind::Int32 => boxed::<i32>(requested),
        NumericKind::Int64 => boxed::<i64>(requested),
        NumericKind::UInt8 => boxed::<u8>(requested),
        NumericKind::UInt16 => boxed::<u16>(requested),
        NumericKind::UInt32 => boxed::<u32>(requested),
        NumericKind::UInt64 => boxed::<u64>(requested),
        NumericKind::Float32 => boxed::<f32>(requested),
        NumericKind::Float64 => boxed::<f64>(requested),
    }
}
