//! Free-function helpers layered on the queue's iteration contract.

use crate::error::Result;
use crate::queues::queue::GrowableQueue;

/// Builds a new queue holding, in order, clones of the elements of `queue`
/// for which `predicate` returns `true`. `queue` is not modified.
///
/// # Errors
/// [`Error::Alloc`](crate::Error::Alloc) if the result queue cannot grow.
///
/// ```rust
/// use growable_collections::{GrowableQueue, filter};
///
/// let q: GrowableQueue<i32> = (1..=6).collect();
/// let evens = filter(&q, |x| x % 2 == 0).unwrap();
/// assert_eq!(evens.as_slice(), &[2, 4, 6]);
/// ```
pub fn filter<T, P>(queue: &GrowableQueue<T>, mut predicate: P) -> Result<GrowableQueue<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut result = GrowableQueue::try_new()?;
    for item in queue {
        if predicate(item) {
            result.push_back(item.clone())?;
        }
    }
    Ok(result)
}

/// Applies `operation` to every element of `queue` in place, front to back.
/// Length and order are unchanged.
pub fn transform<T, F>(queue: &mut GrowableQueue<T>, mut operation: F)
where
    F: FnMut(&mut T),
{
    let mut cursor = queue.begin_mut();
    while let Ok(item) = cursor.get_mut() {
        operation(item);
        if cursor.advance().is_err() {
            break;
        }
    }
}
