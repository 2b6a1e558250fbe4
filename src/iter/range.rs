use super::{IteratorContext, Iterable, create_iterable};

/// The cursor behind [`create_range_iterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCursor {
    next: i64,
    end: i64,
    step: i64,
    current: i64,
    exhausted: bool,
}

impl RangeCursor {
    fn advance(&mut self) -> bool {
        let past_end = match self.step {
            step if step > 0 => self.next > self.end,
            _ => self.next < self.end,
        };
        if self.exhausted || past_end {
            self.exhausted = true;
            return true;
        }

        self.current = self.next;
        match self.next.checked_add(self.step) {
            Some(next) => self.next = next,
            // The next value isn't representable, so it can't be in range either.
            None => self.exhausted = true,
        }
        false
    }

    const fn current(&self) -> i64 {
        self.current
    }
}

/// An iterator over an inclusive integer range. See [`create_range_iterator`].
pub type RangeIter = Iterable<RangeCursor, i64>;

/// Creates an iterator from `start` to `end` inclusive, moving by `step`.
///
/// Without an `end`, the range holds only `start`. Without a `step`, or with a step of zero,
/// the range counts up by one when `start <= end` and down by one otherwise. A step pointing away
/// from `end` produces nothing.
///
/// # Examples
/// ```
/// # use helper_lib::iter::create_range_iterator;
/// assert_eq!(create_range_iterator(5, Some(1), None).collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
/// assert_eq!(create_range_iterator(0, Some(10), Some(4)).collect::<Vec<_>>(), [0, 4, 8]);
/// assert_eq!(create_range_iterator(1, Some(5), Some(-1)).count(), 0);
/// ```
pub fn create_range_iterator(start: i64, end: Option<i64>, step: Option<i64>) -> RangeIter {
    let end = end.unwrap_or(start);
    let step = match step {
        Some(step) if step != 0 => step,
        _ if start <= end => 1,
        _ => -1,
    };

    let cursor = RangeCursor {
        next: start,
        end,
        step,
        current: start,
        exhausted: false,
    };
    create_iterable(IteratorContext::new(
        cursor,
        RangeCursor::advance,
        RangeCursor::current,
    ))
}
