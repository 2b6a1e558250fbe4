use super::CopyDetails;
use crate::value::{DateRef, Value};

/// Copies dates into new instances with the same timestamp, instead of sharing them.
pub fn clone_dates<E>(details: &mut CopyDetails<'_>) -> Result<bool, E> {
    match &details.value {
        Value::Date(date) => {
            details.value = Value::Date(DateRef::new(date.millis()));
            Ok(true)
        },
        _ => Ok(false),
    }
}

/// Replaces dates with their timestamp in milliseconds.
pub fn dates_as_timestamps<E>(details: &mut CopyDetails<'_>) -> Result<bool, E> {
    match &details.value {
        Value::Date(date) => {
            details.value = Value::Number(date.millis());
            Ok(true)
        },
        _ => Ok(false),
    }
}

/// Combines two handlers. `second` is only consulted when `first` declines the node.
///
/// # Examples
/// ```
/// # use std::convert::Infallible;
/// # use helper_lib::copy::{chain, clone_dates, deep_copy_with};
/// # use helper_lib::value::{DateRef, Function, Value};
/// let handler = chain(clone_dates::<Infallible>, |details| {
///     if details.value.is_function() {
///         details.value = Value::Null;
///         return Ok(true);
///     }
///     Ok(false)
/// });
///
/// let source = Value::array([
///     Value::Date(DateRef::new(5.0)),
///     Value::Function(Function::new("f")),
/// ]);
/// let copy = deep_copy_with(&source, handler);
/// assert_eq!(copy.map(|copy| copy.at(1)), Ok(Value::Null));
/// ```
pub fn chain<A, B, E>(
    mut first: A,
    mut second: B,
) -> impl FnMut(&mut CopyDetails<'_>) -> Result<bool, E>
where
    A: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
    B: FnMut(&mut CopyDetails<'_>) -> Result<bool, E>,
{
    move |details: &mut CopyDetails<'_>| {
        if first(details)? {
            return Ok(true);
        }
        second(details)
    }
}
