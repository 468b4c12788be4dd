//! Position handles over a [`GrowableQueue`] and the iterators built on them.
//!
//! A cursor is a back-reference to its queue plus an index. It does not
//! snapshot anything: whether it is at the end sentinel is decided against the
//! queue's length at the moment of use. Reading or advancing a cursor that sits
//! on the sentinel fails with [`Error::InvalidOperation`].
//!
//! Comparing two [`Cursor`]s from different queues is a caller bug and panics.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use crate::error::{Error, Result};
use crate::queues::queue::GrowableQueue;

// ─── Cursor ───────────────────────────────────────────────────────────────────

/// Read-only cursor, obtained from [`GrowableQueue::begin`] or [`GrowableQueue::end`].
///
/// ```rust
/// use growable_collections::GrowableQueue;
///
/// let q: GrowableQueue<i32> = (1..=3).collect();
/// let mut cursor = q.begin();
/// let mut seen = Vec::new();
/// while cursor != q.end() {
///     seen.push(*cursor.get().unwrap());
///     cursor.advance().unwrap();
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert!(cursor.get().is_err());
/// ```
pub struct Cursor<'a, T> {
    queue: &'a GrowableQueue<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(queue: &'a GrowableQueue<T>, index: usize) -> Self {
        Self { queue, index }
    }

    /// Index of the element under the cursor.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.index
    }

    /// `true` if the cursor sits on the end sentinel of its queue.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.index >= self.queue.len()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] at the end sentinel.
    pub fn get(&self) -> Result<&'a T> {
        self.queue.get(self.index).ok_or(Error::InvalidOperation)
    }

    /// Moves to the next element (prefix increment).
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] at the end sentinel; the cursor does not move.
    pub fn advance(&mut self) -> Result<&mut Self> {
        self.check_not_end()?;
        self.index += 1;
        Ok(self)
    }

    /// Moves to the next element and returns the cursor as it was (postfix increment).
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] at the end sentinel; the cursor does not move.
    pub fn post_advance(&mut self) -> Result<Self> {
        self.check_not_end()?;
        let previous = *self;
        self.index += 1;
        Ok(previous)
    }

    #[inline(always)]
    fn check_not_end(&self) -> Result<()> {
        if self.is_end() {
            return Err(Error::InvalidOperation);
        }
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    /// Compares positions.
    ///
    /// # Panics
    /// If the cursors belong to different queues.
    fn eq(&self, other: &Self) -> bool {
        assert!(
            ptr::eq(self.queue, other.queue),
            "compared cursors from different queues"
        );
        self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.queue.len())
            .finish()
    }
}

// ─── CursorMut ────────────────────────────────────────────────────────────────

/// Mutable cursor, obtained from [`GrowableQueue::begin_mut`].
///
/// It holds the queue's only borrow, so the end sentinel is tested with
/// [`is_end`](CursorMut::is_end) instead of by comparison with a second cursor.
pub struct CursorMut<'a, T> {
    queue: &'a mut GrowableQueue<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(queue: &'a mut GrowableQueue<T>, index: usize) -> Self {
        Self { queue, index }
    }

    /// Index of the element under the cursor (0 is the front).
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Returns `true` once the cursor has reached the end sentinel.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.index >= self.queue.len()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] at the end sentinel.
    pub fn get(&self) -> Result<&T> {
        self.queue.get(self.index).ok_or(Error::InvalidOperation)
    }

    /// Mutable access to the element under the cursor; same failure as [`get`](Self::get).
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.queue.get_mut(self.index).ok_or(Error::InvalidOperation)
    }

    /// Moves to the next element (prefix increment).
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] at the end sentinel.
    pub fn advance(&mut self) -> Result<&mut Self> {
        if self.is_end() {
            return Err(Error::InvalidOperation);
        }
        self.index += 1;
        Ok(self)
    }

    /// Moves to the next element and returns the position it left (postfix
    /// increment). A copy of a mutable cursor cannot exist, so the old
    /// position is returned instead of the old cursor.
    ///
    /// # Errors
    /// [`Error::InvalidOperation`] at the end sentinel.
    pub fn post_advance(&mut self) -> Result<usize> {
        let previous = self.index;
        self.advance()?;
        Ok(previous)
    }
}

impl<T> PartialEq<usize> for CursorMut<'_, T> {
    fn eq(&self, position: &usize) -> bool {
        self.index == *position
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.queue.len())
            .finish()
    }
}

// ─── Iterators ────────────────────────────────────────────────────────────────

/// Front-to-back iterator over shared references, driven by a [`Cursor`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.get().ok()?;
        self.cursor.advance().ok()?;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.queue.len().saturating_sub(self.cursor.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
        }
    }
}

/// Front-to-back iterator over exclusive references.
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(inner: slice::IterMut<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
