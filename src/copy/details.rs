use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use derive_more::{Display, From, IsVariant};

use crate::value::Value;

/// One step along the path from the origin of a copy to the node being visited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, IsVariant)]
pub enum PathSegment {
    #[display("[{_0}]")]
    Index(usize),
    #[display("{_0}")]
    Key(Rc<str>),
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        PathSegment::Key(Rc::from(value))
    }
}

/// Displays a key path in accessor notation, such as `a.b[0].c`.
#[derive(Debug, Clone, Copy)]
pub struct KeyPath<'a>(pub &'a [PathSegment]);

impl Display for KeyPath<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 && segment.is_key() {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// The record a copy handler receives for each node.
///
/// A handler that returns `Ok(true)` claims the node: whatever is left in `value` becomes the
/// copy of that node and the engine doesn't look inside it.
#[derive(Debug)]
pub struct CopyDetails<'a> {
    /// The node being copied. Handlers may replace it.
    pub value: Value,
    /// The keys and indices leading from `origin` to this node. Empty for the origin itself.
    pub path: &'a [PathSegment],
    /// The top-level value passed to the copy.
    pub origin: &'a Value,
}

impl CopyDetails<'_> {
    /// Returns the path as a displayable value.
    pub const fn key_path(&self) -> KeyPath<'_> {
        KeyPath(self.path)
    }
}
