use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use super::{PullIterator, Step, Thrown};

type Advance<S> = Box<dyn FnMut(&mut S) -> bool>;
type Current<S, T> = Box<dyn Fn(&S) -> T>;
type OnReturn<S, T> = Box<dyn FnMut(&mut S, Step<T>) -> Step<T>>;
type OnThrow<S> = Box<dyn FnMut(&mut S, Thrown) -> Thrown>;

/// Everything needed to build an iterator: the cursor state `S`, a function that advances it
/// and a function that reads the current value out of it, plus optional hooks for early
/// completion and for errors raised by the consumer.
///
/// # Examples
/// ```
/// # use helper_lib::iter::{IteratorContext, create_iterable};
/// // Fibonacci numbers below 50.
/// let context = IteratorContext::new(
///     (0_u32, 1_u32),
///     |(current, next)| {
///         (*current, *next) = (*next, *current + *next);
///         *current >= 50
///     },
///     |(current, _)| *current,
/// );
///
/// let values: Vec<u32> = create_iterable(context).collect();
/// assert_eq!(values, [1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub struct IteratorContext<S, T> {
    state: S,
    advance: Advance<S>,
    current: Current<S, T>,
    on_return: Option<OnReturn<S, T>>,
    on_throw: Option<OnThrow<S>>,
}

impl<S, T> IteratorContext<S, T> {
    /// Creates a context without hooks. `advance` returns true once the sequence is done;
    /// `current` is only called after `advance` returned false.
    pub fn new<A, C>(state: S, advance: A, current: C) -> IteratorContext<S, T>
    where
        A: FnMut(&mut S) -> bool + 'static,
        C: Fn(&S) -> T + 'static,
    {
        IteratorContext {
            state,
            advance: Box::new(advance),
            current: Box::new(current),
            on_return: None,
            on_throw: None,
        }
    }

    /// Adds a hook that runs when the consumer closes the iterator.
    pub fn on_return<R>(mut self, hook: R) -> IteratorContext<S, T>
    where
        R: FnMut(&mut S, Step<T>) -> Step<T> + 'static,
    {
        self.on_return = Some(Box::new(hook));
        self
    }

    /// Adds a hook that sees, and may replace, errors raised by the consumer.
    pub fn on_throw<R>(mut self, hook: R) -> IteratorContext<S, T>
    where
        R: FnMut(&mut S, Thrown) -> Thrown + 'static,
    {
        self.on_throw = Some(Box::new(hook));
        self
    }
}

impl<S: Debug, T> Debug for IteratorContext<S, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IteratorContext")
            .field("state", &self.state)
            .field("on_return", &self.on_return.is_some())
            .field("on_throw", &self.on_throw.is_some())
            .finish_non_exhaustive()
    }
}

/// A pull-based iterator driven by an [`IteratorContext`]. See [`create_iterator`].
#[derive(Debug)]
pub struct PullIter<S, T> {
    context: IteratorContext<S, T>,
}

impl<S, T> PullIter<S, T> {
    /// Advances the cursor, returning the new current value or [`Step::Done`].
    ///
    /// Whether pulling again after the end stays done is up to the context's advance function.
    pub fn pull(&mut self) -> Step<T> {
        let context = &mut self.context;
        if (context.advance)(&mut context.state) {
            Step::done()
        } else {
            Step::Next((context.current)(&context.state))
        }
    }

    /// Runs the completion hook with `last`, returning its result, or `None` without a hook.
    pub fn close(&mut self, last: Step<T>) -> Option<Step<T>> {
        let context = &mut self.context;
        let hook = context.on_return.as_mut()?;
        Some(hook(&mut context.state, last))
    }

    /// Runs the error hook, if any, and returns the error the caller should propagate.
    pub fn throw(&mut self, error: Thrown) -> Thrown {
        let context = &mut self.context;
        match context.on_throw.as_mut() {
            Some(hook) => hook(&mut context.state, error),
            None => error,
        }
    }

    pub const fn has_return(&self) -> bool {
        self.context.on_return.is_some()
    }

    pub const fn has_throw(&self) -> bool {
        self.context.on_throw.is_some()
    }

    /// Returns the cursor state.
    pub const fn state(&self) -> &S {
        &self.context.state
    }
}

impl<S, T> PullIterator for PullIter<S, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        PullIter::pull(self)
    }

    fn close(&mut self, last: Step<T>) -> Option<Step<T>> {
        PullIter::close(self, last)
    }

    fn throw(&mut self, error: Thrown) -> Thrown {
        PullIter::throw(self, error)
    }
}

/// A [`PullIter`] that is also a Rust [`Iterator`], so it works with `for` loops and adapters.
/// See [`create_iterable`].
#[derive(Debug)]
pub struct Iterable<S, T> {
    inner: PullIter<S, T>,
}

impl<S, T> Iterable<S, T> {
    /// Returns the iterable itself, as an iterator.
    pub const fn iter(&mut self) -> &mut Self {
        self
    }

    /// Drops the [`Iterator`] capability, keeping the underlying pull iterator.
    pub fn into_pull_iter(self) -> PullIter<S, T> {
        self.inner
    }
}

impl<S, T> Deref for Iterable<S, T> {
    type Target = PullIter<S, T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S, T> DerefMut for Iterable<S, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<S, T> Iterator for Iterable<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.pull().into_next()
    }
}

impl<S, T> PullIterator for Iterable<S, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        self.inner.pull()
    }

    fn close(&mut self, last: Step<T>) -> Option<Step<T>> {
        self.inner.close(last)
    }

    fn throw(&mut self, error: Thrown) -> Thrown {
        self.inner.throw(error)
    }
}

/// Builds a pull-based iterator from `context`.
///
/// # Examples
/// ```
/// # use helper_lib::iter::{IteratorContext, Step, create_iterator};
/// let context = IteratorContext::new(3, |left: &mut u8| {
///     if *left == 0 {
///         return true;
///     }
///     *left -= 1;
///     false
/// }, |left| *left)
/// .on_return(|left, last| {
///     *left = 0;
///     last
/// });
///
/// let mut iter = create_iterator(context);
/// assert_eq!(iter.pull(), Step::Next(2));
/// assert_eq!(iter.close(Step::Next(2)), Some(Step::Next(2)));
/// assert_eq!(iter.pull(), Step::Done(None));
/// ```
pub fn create_iterator<S, T>(context: IteratorContext<S, T>) -> PullIter<S, T> {
    PullIter { context }
}

/// Builds an iterator from `context` that is usable both through [`PullIter::pull`] and as a
/// Rust [`Iterator`].
pub fn create_iterable<S, T>(context: IteratorContext<S, T>) -> Iterable<S, T> {
    Iterable {
        inner: create_iterator(context),
    }
}
