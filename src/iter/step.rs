use std::error::Error;

use derive_more::{Display, Error, IsVariant};

/// The result of pulling from an iterator: either the next value, or the end of the sequence
/// with an optional completion value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Step<T> {
    Next(T),
    Done(Option<T>),
}

impl<T> Step<T> {
    /// A plain end of sequence, carrying no value.
    pub const fn done() -> Step<T> {
        Step::Done(None)
    }

    /// Returns the value carried by either variant.
    pub fn value(self) -> Option<T> {
        match self {
            Step::Next(value) => Some(value),
            Step::Done(value) => value,
        }
    }

    /// Returns the value of a `Next` step, treating any `Done` as the end of iteration.
    pub fn into_next(self) -> Option<T> {
        match self {
            Step::Next(value) => Some(value),
            Step::Done(_) => None,
        }
    }
}

/// What a consumer callback wants to happen after it has seen a value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Control {
    #[default]
    Continue,
    Stop,
}

impl Control {
    /// The integer a callback returns to request early termination.
    pub const STOP_SENTINEL: i32 = -1;

    /// Maps [`Control::STOP_SENTINEL`] to [`Control::Stop`] and anything else to
    /// [`Control::Continue`].
    pub const fn from_sentinel(value: i32) -> Control {
        if value == Control::STOP_SENTINEL {
            Control::Stop
        } else {
            Control::Continue
        }
    }
}

impl From<()> for Control {
    fn from((): ()) -> Self {
        Control::Continue
    }
}

/// Lets callbacks return [`Control::STOP_SENTINEL`] directly.
impl From<i32> for Control {
    fn from(value: i32) -> Self {
        Control::from_sentinel(value)
    }
}

/// An error raised by a consumer callback while an iterator was being consumed.
///
/// Any [`Error`] converts into `Thrown`, so `?` works inside callbacks. `Thrown` itself does not
/// implement [`Error`].
#[derive(Debug, Display)]
pub struct Thrown(Box<dyn Error + 'static>);

impl Thrown {
    pub fn new<E: Error + 'static>(error: E) -> Thrown {
        Thrown(Box::new(error))
    }

    /// Creates a `Thrown` from a plain message.
    pub fn msg(message: impl Into<String>) -> Thrown {
        Thrown::new(ThrownMessage {
            message: message.into(),
        })
    }

    /// Returns true if the wrapped error is an `E`.
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.0.is::<E>()
    }

    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Unwraps the inner error.
    pub fn into_inner(self) -> Box<dyn Error + 'static> {
        self.0
    }
}

impl<E: Error + 'static> From<E> for Thrown {
    fn from(value: E) -> Self {
        Thrown::new(value)
    }
}

/// The error behind [`Thrown::msg`].
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("{message}")]
pub struct ThrownMessage {
    pub message: String,
}
