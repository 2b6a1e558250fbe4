//! A deep-copy engine for [`Value`](crate::value::Value) graphs.
//!
//! [`deep_copy`] and [`deep_copy_with`] produce a fresh graph, [`copy_props`] and
//! [`deep_extend`] copy into an existing object. Cycles and shared nodes are resolved by identity
//! for the duration of one call, so they are reproduced in the copy rather than flattened or
//! reported as errors.
//!
//! A handler can claim any node before the default copying applies, see [`CopyDetails`]. A few
//! ready-made handlers live in this module as well.

mod deep_copy;
mod details;
mod handlers;

pub use deep_copy::*;
pub use details::*;
pub use handlers::*;
