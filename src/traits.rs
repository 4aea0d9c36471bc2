//! Error types and the uniform interface over statistics windows
//!
//! Every [`WindowStatistics`](crate::statistics::WindowStatistics)
//! instantiation implements [`WindowedStatistic`], which is what the engine
//! holds once the numeric kind has been resolved at setup.

use core::fmt::{self, Debug};

use crate::kind::NumericKind;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error from a fixed or ring buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A buffer must hold at least one element
    ZeroCapacity,
    /// The allocator could not provide the backing storage
    AllocationFailed { capacity: usize },
    /// Index outside `0..capacity`
    OutOfBounds { index: usize, capacity: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroCapacity => write!(f, "buffer capacity must be non-zero"),
            BufferError::AllocationFailed { capacity } => {
                write!(f, "failed to allocate buffer of {} elements", capacity)
            }
            BufferError::OutOfBounds { index, capacity } => {
                write!(f, "index {} out of bounds for capacity {}", index, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

/// Error while setting up an engine. No engine is left running after one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The host declared no input signal
    NoInputs,
    /// The host declared no output signal
    NoOutputs,
    /// More outputs than aggregates the engine can produce
    TooManyOutputs { found: usize, max: usize },
    /// Signal type is not one of the supported numeric kinds
    UnsupportedType { signal: String, type_name: String },
    /// Output kind differs from the input kind
    TypeMismatch {
        signal: String,
        expected: NumericKind,
        found: NumericKind,
    },
    /// Signal is an array or matrix rather than a single value
    NotScalar {
        signal: String,
        elements: u32,
        dimensions: u8,
    },
    /// Window size of zero
    InvalidWindowSize,
    /// Backing storage for the window could not be allocated
    Allocation(BufferError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoInputs => write!(f, "at least one input signal is required"),
            ConfigError::NoOutputs => write!(f, "at least one output signal is required"),
            ConfigError::TooManyOutputs { found, max } => {
                write!(f, "{} output signals configured, at most {} supported", found, max)
            }
            ConfigError::UnsupportedType { signal, type_name } => {
                write!(f, "signal {}: unsupported type {}", signal, type_name)
            }
            ConfigError::TypeMismatch {
                signal,
                expected,
                found,
            } => write!(
                f,
                "signal {}: type mismatch, expected {}, found {}",
                signal, expected, found
            ),
            ConfigError::NotScalar {
                signal,
                elements,
                dimensions,
            } => write!(
                f,
                "signal {}: must be scalar, found {} elements in {} dimensions",
                signal, elements, dimensions
            ),
            ConfigError::InvalidWindowSize => write!(f, "window size must be non-zero"),
            ConfigError::Allocation(err) => write!(f, "allocation failed: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for ConfigError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::ZeroCapacity => ConfigError::InvalidWindowSize,
            other => ConfigError::Allocation(other),
        }
    }
}

/// Error that aborts a single execution cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    /// `execute` called before a successful setup
    NotConfigured,
    /// Input memory is smaller than one sample
    InputTooShort { expected: usize, found: usize },
    /// The host passed fewer output locations than were configured
    MissingOutput { slot: usize },
    /// Output memory is smaller than one sample
    OutputTooShort {
        slot: usize,
        expected: usize,
        found: usize,
    },
    /// The statistics window rejected the sample
    Buffer(BufferError),
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::NotConfigured => write!(f, "engine has not been set up"),
            CycleError::InputTooShort { expected, found } => {
                write!(f, "input too short: expected {} bytes, found {}", expected, found)
            }
            CycleError::MissingOutput { slot } => write!(f, "output slot {} not provided", slot),
            CycleError::OutputTooShort {
                slot,
                expected,
                found,
            } => write!(
                f,
                "output slot {} too short: expected {} bytes, found {}",
                slot, expected, found
            ),
            CycleError::Buffer(err) => write!(f, "window update failed: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CycleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CycleError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for CycleError {
    fn from(err: BufferError) -> Self {
        CycleError::Buffer(err)
    }
}

/// Lifecycle call made out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Reset requested before setup created the statistics window
    ResetBeforeSetup,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::ResetBeforeSetup => {
                write!(f, "reset requested before the statistics window was created")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

/// A value derived from the window contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Aggregate {
    Average,
    StandardDeviation,
    Min,
    Max,
    Rms,
    MeanSquare,
    Sum,
    LastSample,
}

impl Aggregate {
    /// Aggregates written to output slots 0, 1, 2 and 3, in that order
    pub const OUTPUT_ORDER: [Aggregate; 4] = [
        Aggregate::Average,
        Aggregate::StandardDeviation,
        Aggregate::Min,
        Aggregate::Max,
    ];
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Aggregate::Average => "average",
            Aggregate::StandardDeviation => "standard_deviation",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::Rms => "rms",
            Aggregate::MeanSquare => "mean_square",
            Aggregate::Sum => "sum",
            Aggregate::LastSample => "last_sample",
        };
        f.write_str(name)
    }
}

/// Kind-erased view of a statistics window
///
/// Samples and aggregates cross this interface as native-endian bytes, the
/// way they sit in host signal memory, so the caller never needs to know the
/// concrete sample type.
pub trait WindowedStatistic: Debug + Send {
    /// Numeric kind of the samples
    fn kind(&self) -> NumericKind;

    /// Effective window size
    fn capacity(&self) -> u32;

    /// Samples pushed so far, saturating at `capacity`
    fn sample_count(&self) -> u32;

    /// Restore the freshly constructed state without reallocating
    fn reset(&mut self);

    /// Decode one sample from `input` and push it
    fn push_bytes(&mut self, input: &[u8], infinite_extrema: bool) -> Result<(), CycleError>;

    /// Encode `aggregate` into the output location for `slot`
    fn write_aggregate(
        &self,
        aggregate: Aggregate,
        slot: usize,
        output: &mut [u8],
    ) -> Result<(), CycleError>;

    /// Aggregate widened to `f64`, for diagnostics
    fn aggregate_f64(&self, aggregate: Aggregate) -> f64;

    /// Check if the window has been completely populated at least once
    fn is_full(&self) -> bool {
        self.sample_count() == self.capacity()
    }
}
