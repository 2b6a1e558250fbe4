use std::rc::Rc;

use derive_more::IsVariant;
use rustc_hash::FxHashSet;

use super::{ArrayRef, DateRef, Function, NodeId, ObjectRef, Symbol};

/// A dynamically typed value.
///
/// Equality follows strict equality: primitives compare by value (so `NaN != NaN`) and every
/// reference type compares by identity. Use [`Value::deep_equals`] for structural comparison.
#[derive(Debug, Clone, Default, PartialEq, IsVariant)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(Rc<str>),
    Symbol(Symbol),
    Function(Function),
    Date(DateRef),
    Array(ArrayRef),
    Object(ObjectRef),
}

impl Value {
    /// Creates a new, empty object value.
    pub fn object() -> Value {
        Value::Object(ObjectRef::new())
    }

    /// Creates a new array value holding `values`.
    pub fn array<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Value {
        Value::Array(values.into_iter().collect())
    }

    /// Creates a new string value.
    pub fn string(value: &str) -> Value {
        Value::String(Rc::from(value))
    }

    /// Returns true for `Null` and `Undefined`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Returns the identity of this value if it is an object or array node.
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Value::Array(array) => Some(array.id()),
            Value::Object(object) => Some(object.id()),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub const fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Reads the property `key` (own or inherited) of an object value. Anything else, or a
    /// missing key, reads as `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        self.as_object()
            .and_then(|object| object.get(key))
            .unwrap_or_default()
    }

    /// Reads element `index` of an array value. Anything else, holes included, reads as
    /// `Undefined`.
    pub fn at(&self, index: usize) -> Value {
        self.as_array()
            .and_then(|array| array.get(index))
            .unwrap_or_default()
    }

    /// Compares two value graphs structurally.
    ///
    /// Objects are equal when they enumerate the same keys with deeply equal values, arrays when
    /// they have the same length, the same holes and deeply equal elements, and dates when they
    /// hold the same timestamp. `NaN` is equal to itself here. Any other reference type must be
    /// the same instance. Cycles are handled by assuming a pair of nodes equal while it is still
    /// being compared.
    pub fn deep_equals(&self, other: &Value) -> bool {
        deep_equals(self, other, &mut FxHashSet::default())
    }
}

fn deep_equals(lhs: &Value, rhs: &Value, pending: &mut FxHashSet<(NodeId, NodeId)>) -> bool {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Value::Date(a), Value::Date(b)) => a.millis() == b.millis(),
        (Value::Array(a), Value::Array(b)) => {
            if a.ptr_eq(b) || !pending.insert((a.id(), b.id())) {
                return true;
            }
            let (a, b) = (a.slots(), b.slots());
            a.len() == b.len()
                && a.iter().zip(b.iter()).all(|pair| match pair {
                    (Some(a), Some(b)) => deep_equals(a, b, pending),
                    (None, None) => true,
                    _ => false,
                })
        },
        (Value::Object(a), Value::Object(b)) => {
            if a.ptr_eq(b) || !pending.insert((a.id(), b.id())) {
                return true;
            }
            let (a, b) = (a.enumerate(), b.enumerate());
            a.len() == b.len()
                && a.iter().all(|(key, value)| {
                    b.iter()
                        .find(|(other, _)| other == key)
                        .is_some_and(|(_, other)| deep_equals(value, other, pending))
                })
        },
        _ => lhs == rhs,
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<Rc<str>> for Value {
    fn from(value: Rc<str>) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<DateRef> for Value {
    fn from(value: DateRef) -> Self {
        Value::Date(value)
    }
}

impl From<ArrayRef> for Value {
    fn from(value: ArrayRef) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}
