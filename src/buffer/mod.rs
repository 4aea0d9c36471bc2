//! Fixed-capacity storage for statistics windows
//!
//! This module provides the two buffers a window is built on: a bounds-checked
//! heap array that never resizes, and a ring over it that reports which value
//! each push overwrote.
//!
//! # Example
//!
//! ```
//! use windowstats::buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::<i32>::new(3).unwrap();
//! ring.fill(0);
//!
//! for value in [1, 2, 3] {
//!     ring.push(value).unwrap();
//! }
//!
//! // The ring is full, so the oldest value comes back out
//! assert_eq!(ring.push_and_evict(4), Ok(1));
//! ```

mod fixed;
mod ring;

pub use fixed::FixedBuffer;
pub use ring::RingBuffer;
