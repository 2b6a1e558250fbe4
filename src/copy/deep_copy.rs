use std::convert::Infallible;

use rustc_hash::FxHashMap;

use super::{CopyDetails, KeyPath, PathSegment};
use crate::value::{ArrayRef, NodeId, ObjectRef, Value};

type NoHandler = fn(&mut CopyDetails<'_>) -> Result<bool, Infallible>;

/// A source node paired with its copy. Holding the source keeps its address from being reused
/// by a new node while the copy is running.
#[derive(Debug)]
struct Visited {
    _source: Value,
    target: Value,
}

/// Walks a source graph, keeping track of the nodes already copied during one top-level call.
struct Copier<'a, H> {
    handler: Option<H>,
    origin: &'a Value,
    path: Vec<PathSegment>,
    visited: FxHashMap<NodeId, Visited>,
}

impl<'a, H> Copier<'a, H> {
    fn new(origin: &'a Value, handler: Option<H>) -> Copier<'a, H> {
        Copier {
            handler,
            origin,
            path: Vec::new(),
            visited: FxHashMap::default(),
        }
    }

    /// Records `target` as the copy of `source`. `source` must be an object or array.
    fn register(&mut self, source: &Value, target: Value) {
        if let Some(id) = source.id() {
            self.visited.insert(id, Visited {
                _source: source.clone(),
                target,
            });
        }
    }

    fn copy<E>(&mut self, value: &Value) -> Result<Value, E>
    where
        H: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
    {
        if let Some(visited) = value.id().and_then(|id| self.visited.get(&id)) {
            tracing::trace!(path = %KeyPath(&self.path), "reusing copy of visited node");
            return Ok(visited.target.clone());
        }

        if let Some(handler) = self.handler.as_mut() {
            let mut details = CopyDetails {
                value: value.clone(),
                path: &self.path,
                origin: self.origin,
            };
            if handler(&mut details)? {
                tracing::trace!(path = %KeyPath(&self.path), "handler claimed node");
                return Ok(details.value);
            }
        }

        match value {
            Value::Array(source) => {
                let target = ArrayRef::with_len(source.len());
                self.register(value, Value::Array(target.clone()));
                self.copy_elements(source, |index, copy| target.set(index, copy))?;
                Ok(Value::Array(target))
            },
            Value::Object(source) => {
                let target = ObjectRef::new();
                self.register(value, Value::Object(target.clone()));
                self.copy_properties(source, &target)?;
                Ok(Value::Object(target))
            },
            other => Ok(other.clone()),
        }
    }

    /// Copies every enumerable property of `source`, inherited ones included, onto `target` as
    /// own properties.
    fn copy_properties<E>(&mut self, source: &ObjectRef, target: &ObjectRef) -> Result<(), E>
    where
        H: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
    {
        for (key, value) in source.enumerate() {
            self.path.push(PathSegment::Key(key.clone()));
            let copy = self.copy(&value);
            self.path.pop();
            target.set(key, copy?);
        }
        Ok(())
    }

    /// Copies each present element of `source`, handing the results to `write`. Holes are
    /// skipped and the length is read once up front.
    fn copy_elements<E>(
        &mut self,
        source: &ArrayRef,
        mut write: impl FnMut(usize, Value),
    ) -> Result<(), E>
    where
        H: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
    {
        for index in 0..source.len() {
            let Some(element) = source.get(index) else {
                continue;
            };
            self.path.push(PathSegment::Index(index));
            let copy = self.copy(&element);
            self.path.pop();
            write(index, copy?);
        }
        Ok(())
    }
}

/// Creates a deep copy of `source`.
///
/// Objects and arrays are copied recursively into new nodes; inherited enumerable properties
/// become own properties of the copy. Every other value, dates and functions included, is shared
/// with the source. A node reachable along several paths, or through a cycle, is copied once and
/// the copy is reused, so the result has the same shape of aliasing as the source.
///
/// The copy recurses once per level of nesting, so extremely deep graphs can overflow the stack.
///
/// # Examples
/// ```
/// # use helper_lib::copy::deep_copy;
/// # use helper_lib::value::{ObjectRef, Value};
/// let a = ObjectRef::new();
/// let b = ObjectRef::new();
/// a.set("ref", b.clone());
/// b.set("ref", a.clone());
///
/// let copy = deep_copy(&Value::Object(a.clone()));
/// assert_ne!(copy, Value::Object(a));
/// assert_eq!(copy.get("ref").get("ref"), copy);
/// ```
pub fn deep_copy(source: &Value) -> Value {
    let Ok(copy) = Copier::<NoHandler>::new(source, None).copy(source);
    copy
}

/// Creates a deep copy of `source`, consulting `handler` for every node before the default
/// copying applies.
///
/// The handler sees each distinct node once; nodes that were already copied are resolved before
/// it is called. Returning `Ok(true)` makes the (possibly replaced) `details.value` the copy of
/// that node. An error from the handler aborts the copy and is returned as is.
///
/// # Examples
/// ```
/// # use std::convert::Infallible;
/// # use helper_lib::copy::deep_copy_with;
/// # use helper_lib::value::{DateRef, ObjectRef, Value};
/// let source = ObjectRef::new();
/// source.set("when", DateRef::new(1_000.0));
///
/// let copy = deep_copy_with(&Value::Object(source), |details| {
///     if let Value::Date(date) = &details.value {
///         details.value = Value::Number(date.millis());
///         return Ok::<_, Infallible>(true);
///     }
///     Ok(false)
/// });
/// assert_eq!(copy.map(|copy| copy.get("when")), Ok(Value::Number(1_000.0)));
/// ```
pub fn deep_copy_with<H, E>(source: &Value, handler: H) -> Result<Value, E>
where
    H: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
{
    Copier::new(source, Some(handler)).copy(source)
}

/// Deep copies the enumerable properties of `source` onto `target`, returning `target`.
///
/// `source` itself is not copied: a reference back to it anywhere inside the graph resolves to
/// `target`. An array source writes its elements under their decimal indices. Any other source
/// leaves `target` untouched.
pub fn copy_props(target: &ObjectRef, source: &Value) -> ObjectRef {
    let Ok(target) = copy_props_into::<NoHandler, _>(target, source, None);
    target
}

/// The same as [`copy_props`], with a handler as in [`deep_copy_with`]. The handler isn't called
/// for `source` itself.
pub fn copy_props_with<H, E>(
    target: &ObjectRef,
    source: &Value,
    handler: H,
) -> Result<ObjectRef, E>
where
    H: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
{
    copy_props_into(target, source, Some(handler))
}

fn copy_props_into<H, E>(
    target: &ObjectRef,
    source: &Value,
    handler: Option<H>,
) -> Result<ObjectRef, E>
where
    H: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
{
    let mut copier = Copier::new(source, handler);
    match source {
        Value::Object(object) => {
            copier.register(source, Value::Object(target.clone()));
            copier.copy_properties(object, target)?;
        },
        Value::Array(array) => {
            copier.register(source, Value::Object(target.clone()));
            copier.copy_elements(array, |index, copy| target.set(index.to_string(), copy))?;
        },
        _ => {},
    }
    Ok(target.clone())
}

/// Deep copies each of `sources` onto `target` in order, later sources overwriting keys written
/// by earlier ones. Null and undefined sources are skipped.
pub fn deep_extend(target: &ObjectRef, sources: &[Value]) -> ObjectRef {
    for source in sources.iter().filter(|source| !source.is_nullish()) {
        copy_props(target, source);
    }
    target.clone()
}
