//! Lazy, pull-based iteration.
//!
//! # Purpose
//! [`IteratorContext`] describes a sequence by its cursor state and a pair of functions, one to
//! advance and one to read the current value. [`create_iterator`] and [`create_iterable`] turn a
//! context into an iterator, with optional hooks that run when a consumer stops early or fails.
//! [`create_range_iterator`] and [`create_array_iterator`] are built the same way.
//!
//! # Consumption
//! [`for_each_iteration`] walks anything that converts into a [`Sequence`]: slices, value
//! arrays, pull iterators or plain Rust iterators. Callbacks can stop the walk with
//! [`Control::Stop`] and, through [`try_for_each_iteration`], fail with a [`Thrown`] error that is
//! routed through the iterator's hooks before it reaches the caller.

mod array;
mod create;
mod for_of;
mod pull;
mod range;
mod step;
mod tests;

pub use array::*;
pub use create::*;
pub use for_of::*;
pub use pull::*;
pub use range::*;
pub use step::*;
