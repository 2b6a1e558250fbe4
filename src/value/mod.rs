//! A small dynamically typed value graph, used as the working material of the deep-copy engine
//! and as an array-like source for the iteration consumers.
//!
//! Primitive variants of [`Value`] are plain data. [`ObjectRef`], [`ArrayRef`] and the opaque
//! handle types ([`DateRef`], [`Symbol`], [`Function`]) are reference counted and compare by
//! identity, so a graph built from them may contain shared nodes and cycles.
//!
//! [`Value`] is also re-exported under the parent module.

mod array;
mod object;
mod opaque;
mod tests;
mod value;

pub use array::*;
pub use object::*;
pub use opaque::*;
pub use value::*;

use std::fmt::{self, Debug, Formatter};

/// The identity of a reference-typed node. Two handles share a `NodeId` exactly when they point
/// at the same allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of<T: ?Sized>(ptr: *const T) -> NodeId {
        NodeId(ptr.addr())
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:#x})", self.0)
    }
}
