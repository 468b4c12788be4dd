pub mod clamped;

pub use clamped::ClampedCounter;
