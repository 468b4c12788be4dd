//! Array-backed FIFO queue with doubling growth and compact-on-pop.
//!
//! [`GrowableQueue`] keeps its elements contiguous with the front always at
//! index 0. It starts with room for [`INITIAL_CAPACITY`](GrowableQueue::INITIAL_CAPACITY)
//! elements and doubles its capacity whenever a push finds it full.
//!
//! # Compaction
//! Every [`pop_front`](GrowableQueue::pop_front) reallocates the backing store
//! to exactly the pre-pop length and moves the survivors down one slot. Pops are
//! therefore O(n) and the capacity always tracks the recent working set; this is
//! the intended cost profile, not a ring buffer.
//!
//! # Failure guarantees
//! Every operation that acquires storage (`try_new`, `push_back`, `pop_front`,
//! `try_clone`, `assign`) obtains the new buffer first and only then touches
//! `self`. When the allocator refuses, the error is returned and the queue is
//! exactly as it was. Bulk copies clone into a temporary buffer that is swapped
//! in only once complete, so a panicking `T::clone` also leaves the destination
//! untouched and drops every clone made so far.

use core::fmt;
use core::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::queues::cursor::{Cursor, CursorMut, Iter, IterMut};

/// A first-in first-out queue stored in one contiguous heap buffer.
///
/// ```rust
/// use growable_collections::GrowableQueue;
///
/// let mut q = GrowableQueue::new();
/// q.push_back(1).unwrap();
/// q.push_back(2).unwrap();
/// q.push_back(3).unwrap();
/// assert_eq!(q.pop_front().unwrap(), 1);
/// q.push_back(4).unwrap();
/// assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
pub struct GrowableQueue<T> {
    /// Exactly the live elements, front first. The vector's own allocation is
    /// always at least `capacity`, so pushing below `capacity` never reallocates.
    data: Vec<T>,
    /// Logical capacity driven by the grow/compact policy.
    capacity: usize,
}

impl<T> GrowableQueue<T> {
    /// Number of slots allocated by a fresh queue.
    pub const INITIAL_CAPACITY: usize = 10;

    /// Multiplier applied to the capacity when a push finds the queue full.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty queue with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) slots.
    ///
    /// Allocation failure aborts, as with `Vec::with_capacity`. Use
    /// [`try_new`](Self::try_new) to observe it instead.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(Self::INITIAL_CAPACITY),
            capacity: Self::INITIAL_CAPACITY,
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            data: Self::allocate(Self::INITIAL_CAPACITY)?,
            capacity: Self::INITIAL_CAPACITY,
        })
    }

    /// Returns the number of elements in the queue.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical capacity (slots available before the next growth).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `value` at the back, doubling the capacity first if the queue is full.
    ///
    /// # Errors
    /// [`Error::Alloc`] or [`Error::CapacityOverflow`] if growth fails. The queue
    /// is left unchanged and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.data.len() == self.capacity {
            self.expand()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Returns the front element.
    ///
    /// # Errors
    /// [`Error::EmptyQueue`] if the queue has no elements.
    pub fn front(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyQueue)
    }

    /// Returns the front element mutably.
    ///
    /// # Errors
    /// [`Error::EmptyQueue`] if the queue has no elements.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data.first_mut().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the front element, compacting the storage.
    ///
    /// The backing store is reallocated to exactly the current length, the
    /// remaining elements move down one slot and the capacity becomes the
    /// pre-pop length.
    ///
    /// # Errors
    /// [`Error::EmptyQueue`] if the queue has no elements, [`Error::Alloc`] if the
    /// compacted store cannot be allocated. Both leave the queue unchanged.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let new_capacity = self.data.len();
        let mut compacted = Self::allocate(new_capacity)?;

        let mut survivors = self.data.drain(..);
        let front = survivors.next().ok_or(Error::EmptyQueue)?;
        compacted.extend(survivors);

        trace!(
            "GrowableQueue compacted: capacity {} -> {}, len {}",
            self.capacity,
            new_capacity,
            compacted.len()
        );
        self.data = compacted;
        self.capacity = new_capacity;
        Ok(front)
    }

    /// Returns the element at `index` (0 is the front), or `None`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the element at `index` mutably, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Live elements, front first.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Cursor at the front element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor at the end sentinel (one past the last element).
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Mutable cursor at the front element.
    ///
    /// The cursor borrows the queue exclusively, so there is no matching
    /// `end_mut`; use [`CursorMut::is_end`] to detect the sentinel.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Iterates front to back by shared reference.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin())
    }

    /// Iterates front to back by mutable reference.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.data.iter_mut())
    }

    /// Grows the store by [`GROWTH_FACTOR`](Self::GROWTH_FACTOR), moving every
    /// element into the new buffer before the old one is released.
    #[inline(never)]
    fn expand(&mut self) -> Result<()> {
        let new_capacity = self
            .capacity
            .max(1)
            .checked_mul(Self::GROWTH_FACTOR)
            .ok_or(Error::CapacityOverflow {
                requested: self.capacity,
            })?;
        let mut grown = Self::allocate(new_capacity)?;
        grown.append(&mut self.data);

        trace!(
            "GrowableQueue grew: capacity {} -> {}",
            self.capacity, new_capacity
        );
        self.data = grown;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Acquires an empty buffer able to hold `capacity` elements without reallocating.
    fn allocate(capacity: usize) -> Result<Vec<T>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(capacity).map_err(|err| {
            debug!("GrowableQueue failed to allocate {capacity} slots: {err}");
            Error::from(err)
        })?;
        Ok(buffer)
    }
}

impl<T: Clone> GrowableQueue<T> {
    /// Deep copy with observable allocation failure.
    ///
    /// The copy has the same capacity and contents as `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let buffer = Self::allocate(self.capacity)?;
        Ok(Self {
            data: Self::copy_data(&self.data, buffer),
            capacity: self.capacity,
        })
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built in a temporary buffer first; on failure `self` is
    /// unchanged.
    pub fn assign(&mut self, source: &Self) -> Result<()> {
        let buffer = Self::allocate(source.capacity)?;
        let copied = Self::copy_data(&source.data, buffer);
        self.replace_storage(copied, source.capacity);
        Ok(())
    }

    /// Clones every element of `source` into `destination`, which must already
    /// have room for them. A panicking clone drops `destination` together with
    /// the clones already made.
    fn copy_data(source: &[T], mut destination: Vec<T>) -> Vec<T> {
        destination.extend_from_slice(source);
        destination
    }

    fn replace_storage(&mut self, data: Vec<T>, capacity: usize) {
        let previous = mem::replace(&mut self.data, data);
        self.capacity = capacity;
        drop(previous);
    }
}

impl<T> Default for GrowableQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableQueue<T> {
    fn clone(&self) -> Self {
        let buffer = Vec::with_capacity(self.capacity);
        Self {
            data: Self::copy_data(&self.data, buffer),
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let buffer = Vec::with_capacity(source.capacity);
        let copied = Self::copy_data(&source.data, buffer);
        self.replace_storage(copied, source.capacity);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for GrowableQueue<T> {}

impl<T> Extend<T> for GrowableQueue<T> {
    /// # Panics
    /// If growing the queue fails, mirroring `Vec::extend`. Use
    /// [`push_back`](GrowableQueue::push_back) to handle the error instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.push_back(item) {
                panic!("GrowableQueue::extend: {err}");
            }
        }
    }
}

impl<T> FromIterator<T> for GrowableQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for GrowableQueue<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for GrowableQueue<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for GrowableQueue<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let items = <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        let mut queue = Self::try_new().map_err(serde::de::Error::custom)?;
        for item in items {
            queue.push_back(item).map_err(serde::de::Error::custom)?;
        }
        Ok(queue)
    }
}
