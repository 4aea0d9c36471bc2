//! Heap-backed array with a capacity fixed at construction

use crate::traits::BufferError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Bounds-checked array of `capacity` elements
///
/// Storage is requested once with [`Vec::try_reserve_exact`], so an allocator
/// failure surfaces as [`BufferError::AllocationFailed`] instead of aborting.
/// The buffer never grows or shrinks afterwards.
///
/// # Example
///
/// ```
/// use windowstats::buffer::FixedBuffer;
///
/// let mut buf = FixedBuffer::<u16>::new(4).unwrap();
/// buf.fill(7);
/// buf.put(2, 9).unwrap();
///
/// assert_eq!(buf.get(2), Some(9));
/// assert_eq!(buf.get(4), None);
/// ```
#[derive(Clone, Debug)]
pub struct FixedBuffer<T> {
    storage: Vec<T>,
}

impl<T: Copy + Default> FixedBuffer<T> {
    /// Allocate a buffer of `capacity` default-initialized elements
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed { capacity })?;
        storage.resize(capacity, T::default());

        Ok(Self { storage })
    }
}

impl<T: Copy> FixedBuffer<T> {
    /// Write `value` to every slot
    pub fn fill(&mut self, value: T) {
        self.storage.fill(value);
    }

    /// Read the element at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.storage.get(index).copied()
    }

    /// Overwrite the element at `index`
    #[inline]
    pub fn put(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        let capacity = self.storage.len();
        match self.storage.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BufferError::OutOfBounds { index, capacity }),
        }
    }

    /// Number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.storage.iter()
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        self.storage.capacity() * core::mem::size_of::<T>() + core::mem::size_of::<Self>()
    }
}
