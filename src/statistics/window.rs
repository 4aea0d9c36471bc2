//! Sliding-window statistics with constant-time updates
//!
//! Maintains the running sum and sum of squares of the last `capacity`
//! samples together with the window extrema. Each push costs O(1), except
//! when the evicted sample was the current extremum in windowed mode: then
//! the whole window is rescanned, O(capacity).

use super::sample::Sample;
use crate::buffer::RingBuffer;
use crate::kind::NumericKind;
use crate::traits::{Aggregate, BufferError, CycleError, WindowedStatistic};

/// Running statistics over a window of the most recent samples
///
/// The divisor always assumes a full window, so aggregates are exact only
/// once `capacity` samples have been pushed (see [`is_full`]). Before that,
/// the empty slots count as zeros and pull averages toward zero.
///
/// [`is_full`]: WindowStatistics::is_full
///
/// # Example
///
/// ```
/// use windowstats::statistics::WindowStatistics;
///
/// let mut stats = WindowStatistics::<f64>::new(4).unwrap();
///
/// for value in [6.0, 2.0, 2.0, 4.0] {
///     stats.push(value, false).unwrap();
/// }
///
/// assert_eq!(stats.average(), 3.5);
/// assert_eq!(stats.max(), 6.0);
///
/// // 6.0 leaves the window, the maximum is recomputed
/// stats.push(1.0, false).unwrap();
/// assert_eq!(stats.max(), 4.0);
/// ```
///
/// Integer windows are rounded down to a power of two so averaging is a
/// shift:
///
/// ```
/// use windowstats::statistics::WindowStatistics;
///
/// let stats = WindowStatistics::<u16>::new(1000).unwrap();
/// assert_eq!(stats.capacity(), 512);
/// assert_eq!(stats.divisor(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct WindowStatistics<T: Sample> {
    /// Window size as requested
    requested_capacity: u32,
    /// Effective window size
    capacity: u32,
    /// Samples pushed, saturating at capacity
    sample_count: u32,
    sum: T,
    sum_of_squares: T,
    max: T,
    min: T,
    last_sample: T,
    samples: RingBuffer<T>,
    squares: RingBuffer<T>,
    divisor: T::Divisor,
}

impl<T: Sample> WindowStatistics<T> {
    /// Create a window for `requested` samples
    ///
    /// Integer kinds get the largest power of two not above `requested`;
    /// float kinds get exactly `requested`.
    pub fn new(requested: u32) -> Result<Self, BufferError> {
        if requested == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        let (capacity, divisor) = T::window_policy(requested);
        let mut stats = Self {
            requested_capacity: requested,
            capacity,
            sample_count: 0,
            sum: T::ZERO,
            sum_of_squares: T::ZERO,
            max: T::MIN,
            min: T::MAX,
            last_sample: T::ZERO,
            samples: RingBuffer::new(capacity as usize)?,
            squares: RingBuffer::new(capacity as usize)?,
            divisor,
        };
        stats.reset();
        Ok(stats)
    }

    /// Forget every sample, keeping the allocated buffers
    pub fn reset(&mut self) {
        self.sample_count = 0;
        self.sum = T::ZERO;
        self.sum_of_squares = T::ZERO;
        self.last_sample = T::ZERO;
        self.max = T::MIN;
        self.min = T::MAX;
        self.samples.fill(T::ZERO);
        self.squares.fill(T::ZERO);
    }

    /// Push one sample, evicting the oldest
    ///
    /// With `infinite_extrema` the extrema cover every sample ever pushed and
    /// never move back; otherwise they track the current window.
    pub fn push(&mut self, sample: T, infinite_extrema: bool) -> Result<(), BufferError> {
        let evicted = self.samples.push_and_evict(sample)?;
        let squared = sample.mul(sample);
        let evicted_squared = self.squares.push_and_evict(squared)?;

        if self.sample_count < self.capacity {
            self.sample_count += 1;
        }
        self.last_sample = sample;
        self.sum = self.sum.sub(evicted).add(sample);
        self.sum_of_squares = self.sum_of_squares.sub(evicted_squared).add(squared);

        // NaN or an infinity can't be subtracted back out once it leaves the
        // window, so a non-finite float sum is rebuilt from the rings.
        if !self.sum.is_finite() || !self.sum_of_squares.is_finite() {
            self.rescan_sums();
        }

        // The new sample is compared before any rescan, so on a tie with the
        // evicted extremum the rescan still runs and sees the new sample.
        if sample > self.max {
            self.max = sample;
        } else if !infinite_extrema && evicted == self.max {
            self.max = self.scan_max();
        }

        if sample < self.min {
            self.min = sample;
        } else if !infinite_extrema && evicted == self.min {
            self.min = self.scan_min();
        }

        Ok(())
    }

    fn rescan_sums(&mut self) {
        self.sum = self.samples.iter().fold(T::ZERO, |acc, &v| acc.add(v));
        self.sum_of_squares = self.squares.iter().fold(T::ZERO, |acc, &v| acc.add(v));
    }

    fn scan_max(&self) -> T {
        self.samples
            .iter()
            .fold(T::MIN, |acc, &v| if v > acc { v } else { acc })
    }

    fn scan_min(&self) -> T {
        self.samples
            .iter()
            .fold(T::MAX, |acc, &v| if v < acc { v } else { acc })
    }

    /// Window mean
    #[inline]
    pub fn average(&self) -> T {
        self.sum.scale(self.divisor)
    }

    /// Mean of the squared samples
    #[inline]
    pub fn mean_square(&self) -> T {
        self.sum_of_squares.scale(self.divisor)
    }

    /// Root mean square
    pub fn rms(&self) -> T {
        self.mean_square().root()
    }

    /// Population standard deviation, `sqrt(E[x^2] - E[x]^2)`
    ///
    /// Truncation or rounding can push the variance below zero. A warning is
    /// logged and a value is still returned: zero for floats, the root of the
    /// wrapped bit pattern for integers.
    pub fn standard_deviation(&self) -> T {
        let average = self.average();
        self.mean_square()
            .sub(average.mul(average))
            .variance_root()
    }

    /// Sum of the samples in the window
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Maximum over the window, or over all history in infinite mode
    pub fn max(&self) -> T {
        self.max
    }

    /// Minimum over the window, or over all history in infinite mode
    pub fn min(&self) -> T {
        self.min
    }

    /// Most recently pushed sample
    pub fn last_sample(&self) -> T {
        self.last_sample
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn requested_capacity(&self) -> u32 {
        self.requested_capacity
    }

    /// Shift count for integers, reciprocal of the capacity for floats
    pub fn divisor(&self) -> T::Divisor {
        self.divisor
    }

    /// Check if `capacity` samples have been pushed since the last reset
    pub fn is_full(&self) -> bool {
        self.sample_count == self.capacity
    }

    /// Check if nothing has been pushed since the last reset
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Read one aggregate
    pub fn aggregate(&self, aggregate: Aggregate) -> T {
        match aggregate {
            Aggregate::Average => self.average(),
            Aggregate::StandardDeviation => self.standard_deviation(),
            Aggregate::Min => self.min(),
            Aggregate::Max => self.max(),
            Aggregate::Rms => self.rms(),
            Aggregate::MeanSquare => self.mean_square(),
            Aggregate::Sum => self.sum(),
            Aggregate::LastSample => self.last_sample(),
        }
    }

    /// All aggregates at once
    pub fn snapshot(&self) -> WindowSnapshot<T> {
        WindowSnapshot {
            sample_count: self.sample_count,
            capacity: self.capacity,
            average: self.average(),
            standard_deviation: self.standard_deviation(),
            rms: self.rms(),
            sum: self.sum,
            min: self.min,
            max: self.max,
            last_sample: self.last_sample,
        }
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        self.samples.size_bytes() + self.squares.size_bytes() + core::mem::size_of::<Self>()
    }
}

/// Point-in-time copy of every aggregate of a window
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot<T> {
    pub sample_count: u32,
    pub capacity: u32,
    pub average: T,
    pub standard_deviation: T,
    pub rms: T,
    pub sum: T,
    pub min: T,
    pub max: T,
    pub last_sample: T,
}

impl<T: Sample> WindowedStatistic for WindowStatistics<T> {
    fn kind(&self) -> NumericKind {
        T::KIND
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn reset(&mut self) {
        WindowStatistics::reset(self);
    }

    fn push_bytes(&mut self, input: &[u8], infinite_extrema: bool) -> Result<(), CycleError> {
        let sample = T::read_ne(input).ok_or(CycleError::InputTooShort {
            expected: T::KIND.byte_width(),
            found: input.len(),
        })?;
        self.push(sample, infinite_extrema)?;
        Ok(())
    }

    fn write_aggregate(
        &self,
        aggregate: Aggregate,
        slot: usize,
        output: &mut [u8],
    ) -> Result<(), CycleError> {
        if self.aggregate(aggregate).write_ne(output) {
            Ok(())
        } else {
            Err(CycleError::OutputTooShort {
                slot,
                expected: T::KIND.byte_width(),
                found: output.len(),
            })
        }
    }

    fn aggregate_f64(&self, aggregate: Aggregate) -> f64 {
        self.aggregate(aggregate).to_f64()
    }
}
