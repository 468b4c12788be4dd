//! # Growable Collections
//!
//! Two small building blocks with no I/O and no shared state.
//!
//! * [`GrowableQueue`]: a FIFO queue stored in one contiguous heap buffer. It
//!   doubles its capacity when a push finds it full and compacts to the exact
//!   length on every pop.
//! * [`ClampedCounter`]: an integer that saturates inside `[0, max]`, for
//!   bounded resources such as hit points or quotas.
//!
//! ## Key Features
//!
//! * **Strong failure guarantee:** storage is acquired before the queue is
//!   touched. Allocation failures come back as [`Error::Alloc`] and a panicking
//!   `T::clone` during a copy leaves the destination unchanged.
//! * **Checked cursors:** [`Cursor`] and [`CursorMut`] report
//!   [`Error::InvalidOperation`] instead of reading past the end.
//! * **Functional helpers:** [`filter`] and [`transform`] work on any queue.
//!
//! ## Capacity Policy
//!
//! | Event | Capacity afterwards |
//! |-------|---------------------|
//! | `GrowableQueue::new()` | `10` |
//! | `push_back` on a full queue | `capacity * 2` |
//! | `pop_front` | length before the pop |
//!
//! ## Examples
//!
//! ### GrowableQueue
//!
//! ```rust
//! use growable_collections::{GrowableQueue, filter, transform};
//!
//! let mut q = GrowableQueue::new();
//! for i in 1..=3 {
//!     q.push_back(i).unwrap();
//! }
//! assert_eq!(*q.front().unwrap(), 1);
//!
//! q.pop_front().unwrap();
//! q.push_back(4).unwrap();
//! assert_eq!(q.as_slice(), &[2, 3, 4]);
//!
//! transform(&mut q, |x| *x *= 10);
//! let big = filter(&q, |x| *x > 25).unwrap();
//! assert_eq!(big.as_slice(), &[30, 40]);
//! ```
//!
//! ### ClampedCounter
//!
//! ```rust
//! use growable_collections::ClampedCounter;
//!
//! let mut hp = ClampedCounter::new(100).unwrap();
//! hp -= 43;
//! assert_eq!(hp.to_string(), "57(100)");
//! assert!(hp < ClampedCounter::default());
//! ```
//!
//! ## Cargo Features
//!
//! * `serde`: `Serialize`/`Deserialize` for both types. Queues use the
//!   sequence form; counters re-validate `max` on the way in.

// --- Module Declarations ---

pub mod counters;
pub mod error;
pub mod queues;

// --- Re-exports ---

pub use counters::ClampedCounter;
pub use error::{Error, Result};
pub use queues::{Cursor, CursorMut, GrowableQueue, Iter, IterMut, filter, transform};
