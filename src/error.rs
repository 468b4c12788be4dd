//! Error type shared by every collection in the crate.

use std::collections::TryReserveError;

use thiserror::Error;

/// Failure conditions raised by [`GrowableQueue`](crate::GrowableQueue),
/// its cursors, and [`ClampedCounter`](crate::ClampedCounter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A counter was constructed with a non-positive maximum.
    #[error("invalid argument: counter max must be positive, got {max}")]
    InvalidArgument { max: i32 },

    /// `front`, `front_mut` or `pop_front` was called on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,

    /// A cursor positioned at the end sentinel was dereferenced or advanced.
    #[error("invalid operation: cursor is at the end of the queue")]
    InvalidOperation,

    /// The allocator refused to provide backing storage.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// Growing the queue would overflow `usize`.
    #[error("capacity overflow: cannot grow beyond {requested} slots")]
    CapacityOverflow { requested: usize },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(Error::EmptyQueue.to_string(), "queue is empty");
        assert!(
            Error::InvalidArgument { max: -3 }
                .to_string()
                .contains("-3")
        );
        assert!(Error::InvalidOperation.to_string().contains("end"));
        assert!(
            Error::CapacityOverflow { requested: 7 }
                .to_string()
                .contains('7')
        );
    }

    #[test]
    fn test_error_from_try_reserve() {
        let mut v: Vec<u8> = Vec::new();
        let reserve_err = v.try_reserve_exact(usize::MAX).unwrap_err();
        let err: Error = reserve_err.into();
        assert!(matches!(err, Error::Alloc(_)));
        assert!(err.to_string().starts_with("allocation failed"));
    }
}
