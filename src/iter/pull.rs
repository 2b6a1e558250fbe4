use super::{Step, Thrown};

/// A pull-based iterator with optional completion and error hooks.
///
/// This trait is object safe, consumers hold iterators as `dyn PullIterator`.
pub trait PullIterator {
    type Item;

    /// Advances the iterator and returns the next step.
    fn pull(&mut self) -> Step<Self::Item>;

    /// Tells the iterator that its consumer is finished with it, handing over the last step the
    /// consumer saw. Returns `None` if the iterator has no completion hook.
    fn close(&mut self, last: Step<Self::Item>) -> Option<Step<Self::Item>> {
        let _ = last;
        None
    }

    /// Tells the iterator that its consumer failed while processing a value. Returns the error
    /// the consumer should propagate; without an error hook that is `error` itself.
    fn throw(&mut self, error: Thrown) -> Thrown {
        error
    }
}

impl<P: PullIterator + ?Sized> PullIterator for &mut P {
    type Item = P::Item;

    fn pull(&mut self) -> Step<P::Item> {
        (**self).pull()
    }

    fn close(&mut self, last: Step<P::Item>) -> Option<Step<P::Item>> {
        (**self).close(last)
    }

    fn throw(&mut self, error: Thrown) -> Thrown {
        (**self).throw(error)
    }
}

impl<P: PullIterator + ?Sized> PullIterator for Box<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Step<P::Item> {
        (**self).pull()
    }

    fn close(&mut self, last: Step<P::Item>) -> Option<Step<P::Item>> {
        (**self).close(last)
    }

    fn throw(&mut self, error: Thrown) -> Thrown {
        (**self).throw(error)
    }
}

/// Adapts a Rust [`Iterator`] into a [`PullIterator`] without hooks. See [`pull_from`].
#[derive(Debug, Clone)]
pub struct Pulled<I>(I);

impl<I: Iterator> PullIterator for Pulled<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Step<I::Item> {
        match self.0.next() {
            Some(value) => Step::Next(value),
            None => Step::done(),
        }
    }
}

/// Wraps anything iterable as a [`PullIterator`].
pub fn pull_from<I: IntoIterator>(values: I) -> Pulled<I::IntoIter> {
    Pulled(values.into_iter())
}
