pub mod cursor;
pub mod functional;
pub mod queue;

pub use cursor::{Cursor, CursorMut, Iter, IterMut};
pub use functional::{filter, transform};
pub use queue::GrowableQueue;
