//! This crate is my take on the two helpers in a JavaScript-style utility belt that actually need
//! some thought: a deep copy and an iterator protocol.
//!
//! # Purpose
//! Most of the helpers in a library like this are one-liners, so I haven't bothered with them.
//! The two that aren't are the ones I've kept here:
//! - [`copy`]: Recursively copies [`Value`] graphs, reproducing cycles and shared nodes and
//!   letting a handler take over any node.
//! - [`iter`]: Builds iterators out of a cursor and an advance function, with hooks for early
//!   completion and consumer errors, and consumes anything sequence-like through one loop.
//!
//! To have something to copy, I've also written a small dynamically typed [`value`] graph. It
//! isn't trying to be a JavaScript engine, it just has enough (identity, prototypes, sparse
//! arrays) to make copying interesting.
//!
//! # Error Handling
//! Nothing here fails on its own. Errors only come from user callbacks and I pass them back up
//! unchanged: a copy handler picks its own error type, while iteration callbacks raise a
//! [`Thrown`](iter::Thrown) so that it can be routed through an iterator's hooks on the way out.
//! I went with a boxed error there because a callback can fail for any reason at all, and
//! forcing an enum on it would just mean wrapping everything twice.
//!
//! Absent or non-iterable sequences are treated as empty rather than as errors, and cycles are
//! resolved instead of reported.
//!
//! # Threading
//! Everything is single-threaded and synchronous. Values are built on [`Rc`](std::rc::Rc) and
//! [`RefCell`](std::cell::RefCell), so they can't cross threads to begin with. I never hold a
//! borrow of a value while a callback runs, so callbacks are free to read or mutate the graph
//! being walked.
//!
//! # Dependencies
//! I've tried to keep these light: `derive_more` for the usual derives, `rustc-hash` for the
//! identity maps used while copying and `tracing` for diagnostics. Notable events (reused copies,
//! handler claims, early stops, routed errors) are emitted as `trace` and `debug` events. I don't
//! install a subscriber, that's up to you.
//!
//! # Features
//! - `copy`: The deep-copy engine.
//! - `iter`: The iterator family.
//!
//! Both are enabled by default. The value graph is always available.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "copy")]
pub mod copy;
#[cfg(feature = "iter")]
pub mod iter;
pub mod value;

#[cfg(test)]
pub(crate) mod util;

#[doc(inline)]
pub use value::Value;
