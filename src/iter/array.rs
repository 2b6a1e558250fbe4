use super::{IteratorContext, Iterable, create_iterable};

/// The cursor behind [`create_array_iterator`]: a private copy of the values and a position.
#[derive(Debug, Clone)]
pub struct ArrayCursor<T> {
    values: Vec<T>,
    position: usize,
    next: usize,
}

impl<T: Clone> ArrayCursor<T> {
    fn advance(&mut self) -> bool {
        if self.next >= self.values.len() {
            return true;
        }
        self.position = self.next;
        self.next += 1;
        false
    }

    fn current(&self) -> T {
        self.values[self.position].clone()
    }
}

/// An iterator over a snapshot of a slice. See [`create_array_iterator`].
pub type ArrayIter<T> = Iterable<ArrayCursor<T>, T>;

/// Creates an iterator over a copy of `values`, so later changes to the source don't show up
/// during iteration. `None` gives an iterator that is done from the start.
///
/// # Examples
/// ```
/// # use helper_lib::iter::create_array_iterator;
/// let mut source = vec!["a", "b"];
/// let iter = create_array_iterator(Some(source.as_slice()));
/// source.push("c");
///
/// assert_eq!(iter.collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(create_array_iterator::<u8>(None).next(), None);
/// ```
pub fn create_array_iterator<T: Clone + 'static>(values: Option<&[T]>) -> ArrayIter<T> {
    let cursor = ArrayCursor {
        values: values.map(<[T]>::to_vec).unwrap_or_default(),
        position: 0,
        next: 0,
    };
    create_iterable(IteratorContext::new(
        cursor,
        ArrayCursor::advance,
        ArrayCursor::current,
    ))
}
