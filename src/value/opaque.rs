use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use super::NodeId;

/// A unique symbol with an optional description. Every call to [`Symbol::new`] produces a
/// distinct symbol, even when the descriptions match.
#[derive(Clone)]
pub struct Symbol(Rc<Option<Rc<str>>>);

impl Symbol {
    /// Creates a new, unique symbol.
    pub fn new(description: Option<&str>) -> Symbol {
        Symbol(Rc::new(description.map(Rc::from)))
    }

    /// Returns the description this symbol was created with.
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns the identity of this symbol.
    pub fn id(&self) -> NodeId {
        NodeId::of(Rc::as_ptr(&self.0))
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => write!(f, "Symbol({description})"),
            None => write!(f, "Symbol()"),
        }
    }
}

/// An opaque callable. The value graph only tracks its name and identity; the copy engine always
/// shares functions by reference.
#[derive(Clone)]
pub struct Function(Rc<str>);

impl Function {
    /// Creates a new function handle with the provided name.
    pub fn new(name: &str) -> Function {
        Function(Rc::from(name))
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the identity of this function.
    pub fn id(&self) -> NodeId {
        NodeId::of(Rc::as_ptr(&self.0))
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name())
    }
}

/// A mutable point in time, stored as milliseconds since the Unix epoch. Dates are reference
/// types: cloning a `DateRef` shares the same instance.
#[derive(Clone)]
pub struct DateRef(Rc<Cell<f64>>);

impl DateRef {
    /// Creates a new date instance at the provided timestamp.
    pub fn new(millis: f64) -> DateRef {
        DateRef(Rc::new(Cell::new(millis)))
    }

    /// Returns the timestamp of this date in milliseconds.
    pub fn millis(&self) -> f64 {
        self.0.get()
    }

    /// Moves this date (and every handle sharing it) to a new timestamp.
    pub fn set_millis(&self, millis: f64) {
        self.0.set(millis);
    }

    /// Returns the identity of this date.
    pub fn id(&self) -> NodeId {
        NodeId::of(Rc::as_ptr(&self.0))
    }
}

impl PartialEq for DateRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for DateRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.millis())
    }
}
