//! Integer counter that saturates inside `[0, max]`.
//!
//! [`ClampedCounter`] models a bounded resource such as hit points or a quota:
//! it starts full, and every addition or subtraction is clamped back into the
//! valid range before the operation returns.
//!
//! Equality and ordering look at the current value only; two counters with
//! different maximums but the same current value compare equal.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::{Error, Result};

/// A value clamped between `0` and a fixed positive maximum.
///
/// ```rust
/// use growable_collections::ClampedCounter;
///
/// let mut hp = ClampedCounter::new(100).unwrap();
/// hp -= 150;
/// assert_eq!(hp.current(), 0);
/// hp += 1000;
/// assert_eq!(hp.current(), 100);
/// assert_eq!(hp.to_string(), "100(100)");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCounter")
)]
pub struct ClampedCounter {
    max: i32,
    current: i32,
}

impl ClampedCounter {
    /// Maximum used by [`Default`].
    pub const DEFAULT_MAX: i32 = 100;

    /// Creates a full counter (`current == max`).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `max <= 0`.
    pub fn new(max: i32) -> Result<Self> {
        if max <= 0 {
            return Err(Error::InvalidArgument { max });
        }
        Ok(Self { max, current: max })
    }

    #[inline(always)]
    pub fn current(self) -> i32 {
        self.current
    }

    /// Upper bound. Takes `self` by value so it shadows [`Ord::max`].
    #[inline(always)]
    pub fn max(self) -> i32 {
        self.max
    }

    /// Adds `amount` and clamps. Returns `self` so calls can be chained.
    pub fn increase(&mut self, amount: i32) -> &mut Self {
        self.current = self.current.saturating_add(amount);
        self.clamp_current();
        self
    }

    /// Subtracts `amount` and clamps. Returns `self` so calls can be chained.
    pub fn decrease(&mut self, amount: i32) -> &mut Self {
        self.current = self.current.saturating_sub(amount);
        self.clamp_current();
        self
    }

    #[inline(always)]
    fn clamp_current(&mut self) {
        self.current = self.current.clamp(0, self.max);
    }
}

impl Default for ClampedCounter {
    fn default() -> Self {
        Self {
            max: Self::DEFAULT_MAX,
            current: Self::DEFAULT_MAX,
        }
    }
}

impl AddAssign<i32> for ClampedCounter {
    fn add_assign(&mut self, amount: i32) {
        self.increase(amount);
    }
}

impl SubAssign<i32> for ClampedCounter {
    fn sub_assign(&mut self, amount: i32) {
        self.decrease(amount);
    }
}

impl Add<i32> for ClampedCounter {
    type Output = ClampedCounter;

    fn add(mut self, amount: i32) -> Self::Output {
        self += amount;
        self
    }
}

impl Add<ClampedCounter> for i32 {
    type Output = ClampedCounter;

    fn add(self, counter: ClampedCounter) -> Self::Output {
        counter + self
    }
}

impl Sub<i32> for ClampedCounter {
    type Output = ClampedCounter;

    fn sub(mut self, amount: i32) -> Self::Output {
        self -= amount;
        self
    }
}

impl PartialEq for ClampedCounter {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for ClampedCounter {}

// `==` and `lt` are the only primitive comparisons; everything else is
// expressed through them.
impl PartialOrd for ClampedCounter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.current < other.current
    }

    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }
}

impl Ord for ClampedCounter {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.lt(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl fmt::Display for ClampedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.current, self.max)
    }
}

/// Unvalidated wire form; converted through [`ClampedCounter::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCounter {
    max: i32,
    current: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCounter> for ClampedCounter {
    type Error = Error;

    fn try_from(raw: RawCounter) -> Result<Self> {
        let mut counter = ClampedCounter::new(raw.max)?;
        counter.current = raw.current;
        counter.clamp_current();
        Ok(counter)
    }
}
