use std::convert::Infallible;

use super::{Control, Iterable, PullIter, PullIterator, Pulled, Step, Thrown, pull_from};
use crate::value::{ArrayRef, Value};

/// Indexed access to a sequence of known length, which may contain holes.
pub trait ArrayLike {
    type Item;

    fn length(&self) -> usize;

    /// Returns the item at `index`, or `None` for a hole or an index past the end.
    fn item(&self, index: usize) -> Option<Self::Item>;
}

impl<T: Clone> ArrayLike for [T] {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    type Item = A::Item;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn item(&self, index: usize) -> Option<A::Item> {
        (**self).item(index)
    }
}

impl ArrayLike for ArrayRef {
    type Item = Value;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<Value> {
        self.get(index)
    }
}

/// Anything the iteration consumers accept, sorted into the two shapes they know how to walk.
pub enum Sequence<'a, T> {
    /// Nothing to iterate, such as a null or missing source.
    Empty,
    Array(Box<dyn ArrayLike<Item = T> + 'a>),
    Iterator(Box<dyn PullIterator<Item = T> + 'a>),
}

impl<'a, T> Sequence<'a, T> {
    pub fn array<A: ArrayLike<Item = T> + 'a>(values: A) -> Sequence<'a, T> {
        Sequence::Array(Box::new(values))
    }

    pub fn iterator<P: PullIterator<Item = T> + 'a>(iterator: P) -> Sequence<'a, T> {
        Sequence::Iterator(Box::new(iterator))
    }

    /// Wraps anything implementing [`IntoIterator`] as an iterator sequence.
    pub fn iterable<I>(values: I) -> Sequence<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Sequence::iterator(pull_from(values))
    }
}

impl<'a, T: Clone + 'a> From<&'a [T]> for Sequence<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Sequence::array(values)
    }
}

impl<'a, T: Clone + 'a, const N: usize> From<&'a [T; N]> for Sequence<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Sequence::array(values.as_slice())
    }
}

impl<'a, T: Clone + 'a> From<&'a Vec<T>> for Sequence<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Sequence::array(values.as_slice())
    }
}

impl<'a, S: 'a, T: 'a> From<PullIter<S, T>> for Sequence<'a, T> {
    fn from(iterator: PullIter<S, T>) -> Self {
        Sequence::iterator(iterator)
    }
}

impl<'a, S: 'a, T: 'a> From<&'a mut PullIter<S, T>> for Sequence<'a, T> {
    fn from(iterator: &'a mut PullIter<S, T>) -> Self {
        Sequence::iterator(iterator)
    }
}

impl<'a, S: 'a, T: 'a> From<Iterable<S, T>> for Sequence<'a, T> {
    fn from(iterator: Iterable<S, T>) -> Self {
        Sequence::iterator(iterator)
    }
}

impl<'a, S: 'a, T: 'a> From<&'a mut Iterable<S, T>> for Sequence<'a, T> {
    fn from(iterator: &'a mut Iterable<S, T>) -> Self {
        Sequence::iterator(iterator)
    }
}

impl<'a, I: Iterator + 'a> From<Pulled<I>> for Sequence<'a, I::Item> {
    fn from(iterator: Pulled<I>) -> Self {
        Sequence::iterator(iterator)
    }
}

impl<'a> From<&'a ArrayRef> for Sequence<'a, Value> {
    fn from(array: &'a ArrayRef) -> Self {
        Sequence::array(array.clone())
    }
}

/// Arrays are walked as array-likes; any other value has nothing to iterate.
impl<'a> From<&'a Value> for Sequence<'a, Value> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Array(array) => array.into(),
            _ => Sequence::Empty,
        }
    }
}

impl<'a, T, X: Into<Sequence<'a, T>>> From<Option<X>> for Sequence<'a, T> {
    fn from(value: Option<X>) -> Self {
        value.map_or(Sequence::Empty, Into::into)
    }
}

/// Routes a callback error into the iterator that was being consumed.
trait Route: Sized {
    fn route<P: PullIterator + ?Sized>(self, iterator: &mut P) -> Self;
}

impl Route for Infallible {
    fn route<P: PullIterator + ?Sized>(self, _: &mut P) -> Self {
        match self {}
    }
}

impl Route for Thrown {
    fn route<P: PullIterator + ?Sized>(self, iterator: &mut P) -> Self {
        tracing::debug!(error = %self, "routing callback error into iterator");
        iterator.throw(self)
    }
}

fn drive<T, E: Route>(
    sequence: Sequence<'_, T>,
    mut visit: impl FnMut(&T, usize) -> Result<Control, E>,
) -> Result<(), E> {
    match sequence {
        Sequence::Empty => Ok(()),
        Sequence::Array(values) => {
            // Items appended by the callback are out of range.
            let length = values.length();
            for index in 0..length {
                let Some(value) = values.item(index) else {
                    continue;
                };
                if visit(&value, index)?.is_stop() {
                    tracing::debug!(index, "array iteration stopped early");
                    break;
                }
            }
            Ok(())
        },
        Sequence::Iterator(mut iterator) => {
            let mut index = 0;
            while let Step::Next(value) = iterator.pull() {
                match visit(&value, index) {
                    Ok(Control::Continue) => index += 1,
                    Ok(Control::Stop) => {
                        tracing::debug!(index, "iteration stopped early");
                        iterator.close(Step::Next(value));
                        break;
                    },
                    Err(error) => return Err(error.route(&mut *iterator)),
                }
            }
            Ok(())
        },
    }
}

/// Calls `callback` with each value of `sequence` and its index, in order.
///
/// The callback may return `()`, a [`Control`] or an `i32`; [`Control::Stop`] or
/// [`Control::STOP_SENTINEL`] ends the iteration early, in which case an iterator source is
/// closed with the last value it produced and isn't pulled again. An iterator that simply runs
/// out isn't closed. An array-like source has its length fixed up front and its holes skipped. A
/// [`Sequence::Empty`] source, such as `None`, calls nothing.
///
/// # Examples
/// ```
/// # use helper_lib::iter::for_each_iteration;
/// let mut seen = Vec::new();
/// for_each_iteration(&[0, 1, 2, 3], |&value, _| {
///     seen.push(value);
///     if value == 1 { -1 } else { 0 }
/// });
/// assert_eq!(seen, [0, 1]);
/// ```
pub fn for_each_iteration<'a, T, C, F>(sequence: impl Into<Sequence<'a, T>>, mut callback: F)
where
    F: FnMut(&T, usize) -> C,
    C: Into<Control>,
    T: 'a,
{
    let Ok(()) = drive::<T, Infallible>(sequence.into(), |value, index| {
        Ok(callback(value, index).into())
    });
}

/// The same as [`for_each_iteration`], for a callback that can fail.
///
/// When the callback fails while an iterator is being consumed, the error is handed to that
/// iterator's [`throw`](PullIterator::throw) and whatever it returns is propagated. The iterator
/// isn't closed, so an iterator without an error hook gets no signal at all. For an array-like
/// source the error is propagated as is.
pub fn try_for_each_iteration<'a, T, C, F>(
    sequence: impl Into<Sequence<'a, T>>,
    mut callback: F,
) -> Result<(), Thrown>
where
    F: FnMut(&T, usize) -> Result<C, Thrown>,
    C: Into<Control>,
    T: 'a,
{
    drive(sequence.into(), |value, index| callback(value, index).map(Into::into))
}

/// Appends `elements` to `target`: each element of an array, or the value itself for anything
/// else. Null and undefined append nothing.
pub fn arr_append(target: &ArrayRef, elements: &Value) -> ArrayRef {
    match elements {
        Value::Null | Value::Undefined => {},
        Value::Array(_) => arr_append_from(target, elements),
        other => target.push(other.clone()),
    }
    target.clone()
}

/// Appends every value of `sequence` to `target`.
pub fn arr_append_from<'a>(target: &ArrayRef, sequence: impl Into<Sequence<'a, Value>>) {
    for_each_iteration(sequence, |value, _| target.push(value.clone()));
}
