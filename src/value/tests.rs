#![cfg(test)]

use std::rc::Rc;

use super::*;

#[test]
fn test_strict_equality() {
    let object = ObjectRef::new();
    assert_eq!(Value::Object(object.clone()), Value::Object(object));
    assert_ne!(
        Value::object(),
        Value::object(),
        "Distinct objects should never be strictly equal."
    );
    assert_ne!(
        Value::Number(f64::NAN),
        Value::Number(f64::NAN),
        "NaN should not be strictly equal to itself."
    );
    assert_eq!(Value::string("a"), Value::from("a"));
    assert_ne!(
        Value::Symbol(Symbol::new(Some("tag"))),
        Value::Symbol(Symbol::new(Some("tag"))),
        "Symbols with the same description should still be unique."
    );
}

#[test]
fn test_prototype_lookup_and_enumeration() {
    let base = ObjectRef::new();
    base.set("inherited", 1);
    base.set("shadowed", 2);
    base.define("hidden", 3, false);

    let derived = ObjectRef::with_prototype(&base);
    derived.set("own", 4);
    derived.define("shadowed", 5, false);

    assert_eq!(derived.get("inherited"), Some(Value::Number(1.0)));
    assert_eq!(derived.get("shadowed"), Some(Value::Number(5.0)));
    assert_eq!(derived.get_own("inherited"), None);

    let keys: Vec<_> = derived.enumerate().into_iter().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        [Rc::<str>::from("own"), Rc::<str>::from("inherited")],
        "Enumeration should list own keys first, skip non-enumerable and shadowed keys."
    );

    base.set_prototype(Some(derived.clone()));
    assert_eq!(
        derived.enumerate().len(),
        2,
        "A cyclic prototype chain should be walked once."
    );
    assert_eq!(derived.get("missing"), None);
}

#[test]
fn test_sparse_arrays() {
    let array = ArrayRef::with_len(2);
    array.set(3, "last");
    assert_eq!(array.len(), 4);
    assert!(array.is_hole(0));
    assert!(!array.is_hole(3));
    assert!(!array.is_hole(10), "Out of bounds isn't a hole.");

    array.push(true);
    assert_eq!(array.delete(4), Some(Value::Bool(true)));
    assert_eq!(array.len(), 5, "Deleting should leave a hole, not shrink the array.");
    assert!(array.is_hole(4));
}

#[test]
fn test_deep_equals() {
    let build = || {
        let root = ObjectRef::new();
        root.set("list", Value::array([1, 2, 3]));
        root.set("nan", f64::NAN);
        root.set("when", DateRef::new(10.0));
        root.set("self", root.clone());
        Value::Object(root)
    };

    assert!(build().deep_equals(&build()), "Equal cyclic graphs should compare equal.");

    let other = build();
    if let Some(list) = other.get("list").as_array() {
        list.set(1, 20);
    }
    assert!(!build().deep_equals(&other));

    let sparse = ArrayRef::with_len(1);
    assert!(
        !Value::Array(sparse).deep_equals(&Value::array([Value::Undefined])),
        "A hole should differ from an explicit undefined."
    );
}
