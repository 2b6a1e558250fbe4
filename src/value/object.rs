use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use rustc_hash::FxHashSet;

use super::{NodeId, Value};

/// A single named slot on an [`Object`].
#[derive(Debug, Clone)]
pub struct Property {
    /// The property name.
    pub key: Rc<str>,
    /// The value stored under `key`.
    pub value: Value,
    /// Whether the property shows up during enumeration.
    pub enumerable: bool,
}

/// The contents of an object node: own properties in insertion order and an optional prototype
/// from which further properties are inherited.
#[derive(Debug, Default)]
pub struct Object {
    properties: Vec<Property>,
    prototype: Option<ObjectRef>,
}

impl Object {
    fn position(&self, key: &str) -> Option<usize> {
        self.properties.iter().position(|property| &*property.key == key)
    }

    fn own(&self, key: &str) -> Option<&Property> {
        self.position(key).map(|index| &self.properties[index])
    }
}

/// A shared, mutable handle to an [`Object`]. Cloning the handle shares the node; equality is
/// identity.
///
/// # Time Complexity
/// Properties are kept in a list, so for `n` own properties:
///
/// | Method | Complexity |
/// |-|-|
/// | `get_own` | `O(n)` |
/// | `set` | `O(n)` |
/// | `get` | `O(n)` per prototype |
/// | `enumerate` | `O(n)` per prototype |
#[derive(Clone, Default)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    /// Creates a new object with no properties and no prototype.
    pub fn new() -> ObjectRef {
        ObjectRef::default()
    }

    /// Creates a new, empty object inheriting from `prototype`.
    pub fn with_prototype(prototype: &ObjectRef) -> ObjectRef {
        let object = ObjectRef::new();
        object.set_prototype(Some(prototype.clone()));
        object
    }

    /// Returns the identity of this object.
    pub fn id(&self) -> NodeId {
        NodeId::of(Rc::as_ptr(&self.0))
    }

    /// Returns true if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the prototype of this object, if it has one.
    pub fn prototype(&self) -> Option<ObjectRef> {
        self.0.borrow().prototype.clone()
    }

    /// Replaces the prototype of this object.
    pub fn set_prototype(&self, prototype: Option<ObjectRef>) {
        self.0.borrow_mut().prototype = prototype;
    }

    /// Returns the number of own properties, enumerable or not.
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    /// Returns true if the object has no own properties.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the keys of all own properties in insertion order.
    pub fn keys(&self) -> Vec<Rc<str>> {
        self.0.borrow().properties.iter().map(|property| property.key.clone()).collect()
    }

    /// Returns true if `key` is an own property of this object.
    pub fn has_own(&self, key: &str) -> bool {
        self.0.borrow().position(key).is_some()
    }

    /// Returns the value of the own property `key`.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.0.borrow().own(key).map(|property| property.value.clone())
    }

    /// Looks `key` up on this object, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut seen = FxHashSet::default();
        let mut current = Some(self.clone());

        while let Some(object) = current {
            if !seen.insert(object.id()) {
                break;
            }
            let contents = object.0.borrow();
            if let Some(property) = contents.own(key) {
                return Some(property.value.clone());
            }
            current = contents.prototype.clone();
        }

        None
    }

    /// Writes the own property `key`. A new property is enumerable, an existing one keeps its
    /// enumerability.
    pub fn set(&self, key: impl Into<Rc<str>>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut contents = self.0.borrow_mut();
        match contents.position(&key) {
            Some(index) => contents.properties[index].value = value,
            None => contents.properties.push(Property {
                key,
                value,
                enumerable: true,
            }),
        }
    }

    /// Defines (or redefines) the own property `key` with explicit enumerability.
    pub fn define(&self, key: impl Into<Rc<str>>, value: impl Into<Value>, enumerable: bool) {
        let property = Property {
            key: key.into(),
            value: value.into(),
            enumerable,
        };
        let mut contents = self.0.borrow_mut();
        match contents.position(&property.key) {
            Some(index) => contents.properties[index] = property,
            None => contents.properties.push(property),
        }
    }

    /// Removes the own property `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut contents = self.0.borrow_mut();
        let index = contents.position(key)?;
        Some(contents.properties.remove(index).value)
    }

    /// Lists every enumerable property reachable from this object: own properties in insertion
    /// order, then those inherited along the prototype chain. A key is reported once, from the
    /// nearest object that has it. An own non-enumerable property still hides an inherited one of
    /// the same name.
    ///
    /// The result is a snapshot, so no borrow is held while the caller works through it.
    pub fn enumerate(&self) -> Vec<(Rc<str>, Value)> {
        let mut entries = Vec::new();
        let mut shadowed: FxHashSet<Rc<str>> = FxHashSet::default();
        let mut seen = FxHashSet::default();
        let mut current = Some(self.clone());

        while let Some(object) = current {
            if !seen.insert(object.id()) {
                break;
            }
            let contents = object.0.borrow();
            for property in &contents.properties {
                if shadowed.insert(property.key.clone()) && property.enumerable {
                    entries.push((property.key.clone(), property.value.clone()));
                }
            }
            current = contents.prototype.clone();
        }

        entries
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Debug for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Values aren't printed, a cyclic graph would never finish.
        f.debug_struct("ObjectRef")
            .field("id", &self.id())
            .field("keys", &self.keys())
            .finish()
    }
}
