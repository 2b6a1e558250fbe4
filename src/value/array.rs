use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use super::{NodeId, Value};

/// The contents of an array node. Each slot either holds a value or is a hole, which makes
/// sparse arrays representable.
#[derive(Debug, Default)]
pub struct Array {
    slots: Vec<Option<Value>>,
}

/// A shared, mutable handle to an [`Array`]. Cloning the handle shares the node; equality is
/// identity.
#[derive(Clone, Default)]
pub struct ArrayRef(Rc<RefCell<Array>>);

impl ArrayRef {
    /// Creates a new array with no elements.
    pub fn new() -> ArrayRef {
        ArrayRef::default()
    }

    /// Creates a new array of `len` holes.
    pub fn with_len(len: usize) -> ArrayRef {
        let array = ArrayRef::new();
        array.set_len(len);
        array
    }

    /// Returns the identity of this array.
    pub fn id(&self) -> NodeId {
        NodeId::of(Rc::as_ptr(&self.0))
    }

    /// Returns true if both handles refer to the same array.
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the length of the array, holes included.
    pub fn len(&self) -> usize {
        self.0.borrow().slots.len()
    }

    /// Returns true if the array has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grows the array with holes, or truncates it, to exactly `len` slots.
    pub fn set_len(&self, len: usize) {
        self.0.borrow_mut().slots.resize(len, None);
    }

    /// Returns the element at `index`, or `None` for a hole or an out of bounds index.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().slots.get(index).cloned().flatten()
    }

    /// Returns true if `index` is within bounds but holds no element.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.0.borrow().slots.get(index), Some(None))
    }

    /// Writes `value` at `index`, growing the array with holes if needed.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut contents = self.0.borrow_mut();
        if index >= contents.slots.len() {
            contents.slots.resize(index + 1, None);
        }
        contents.slots[index] = Some(value.into());
    }

    /// Appends `value` to the end of the array.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().slots.push(Some(value.into()));
    }

    /// Removes the element at `index`, leaving a hole behind. The length is unchanged.
    pub fn delete(&self, index: usize) -> Option<Value> {
        self.0.borrow_mut().slots.get_mut(index).and_then(Option::take)
    }

    /// Returns a snapshot of every slot.
    pub fn slots(&self) -> Vec<Option<Value>> {
        self.0.borrow().slots.clone()
    }
}

impl<V: Into<Value>> FromIterator<V> for ArrayRef {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ArrayRef(Rc::new(RefCell::new(Array {
            slots: iter.into_iter().map(|value| Some(value.into())).collect(),
        })))
    }
}

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Debug for ArrayRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayRef")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}
