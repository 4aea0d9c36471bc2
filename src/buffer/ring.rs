//! Ring buffer that reports evicted values

use super::FixedBuffer;
use crate::traits::BufferError;

/// Fixed buffer with a write cursor that wraps at `capacity`
///
/// Every slot always holds a value: the ring has no notion of "empty", it is
/// filled at construction and each push overwrites the oldest slot.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    buffer: FixedBuffer<T>,
    /// Next slot to overwrite, always in `0..capacity`
    write_index: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Create a ring of `capacity` default-initialized slots
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self {
            buffer: FixedBuffer::new(capacity)?,
            write_index: 0,
        })
    }
}

impl<T: Copy> RingBuffer<T> {
    /// Write `value` at the cursor and advance it
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.buffer.put(self.write_index, value)?;
        self.write_index += 1;
        if self.write_index == self.buffer.capacity() {
            self.write_index = 0;
        }
        Ok(())
    }

    /// Push `value`, returning the element it overwrote
    #[inline]
    pub fn push_and_evict(&mut self, value: T) -> Result<T, BufferError> {
        let evicted = self
            .buffer
            .get(self.write_index)
            .ok_or(BufferError::OutOfBounds {
                index: self.write_index,
                capacity: self.buffer.capacity(),
            })?;
        self.push(value)?;
        Ok(evicted)
    }

    /// Write `value` to every slot. The cursor is left where it is.
    pub fn fill(&mut self, value: T) {
        self.buffer.fill(value);
    }

    pub fn write_index(&self) -> usize {
        self.write_index
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Slots in storage order, not insertion order
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        self.buffer.size_bytes() + core::mem::size_of::<usize>()
    }
}
