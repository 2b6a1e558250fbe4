#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::count::CallCounter;
use crate::value::{ArrayRef, Value};

fn collect_range(start: i64, end: Option<i64>, step: Option<i64>) -> Vec<i64> {
    let mut values = Vec::new();
    for_each_iteration(create_range_iterator(start, end, step), |&value, _| {
        values.push(value)
    });
    values
}

/// Counts up from zero to `limit` exclusive, counting pulls, closes and throws.
fn instrumented(
    limit: u32,
    pulls: &CallCounter,
    closes: &CallCounter,
    throws: &CallCounter,
) -> PullIter<u32, u32> {
    let (pulls, closes, throws) = (pulls.clone(), closes.clone(), throws.clone());
    let context = IteratorContext::new(
        0,
        move |next: &mut u32| {
            pulls.bump();
            *next += 1;
            *next > limit
        },
        |next| *next - 1,
    )
    .on_return(move |_, last| {
        closes.bump();
        last
    })
    .on_throw(move |_, error| {
        throws.bump();
        error
    });
    create_iterator(context)
}

#[test]
fn test_range_boundaries() {
    assert_eq!(collect_range(5, Some(5), None), [5]);
    assert_eq!(collect_range(5, None, None), [5], "A missing end should mean end = start.");
    assert_eq!(
        collect_range(5, Some(1), None),
        [5, 4, 3, 2, 1],
        "The step should be reversed automatically."
    );
    assert_eq!(collect_range(1, Some(5), Some(0)), [1, 2, 3, 4, 5]);
    assert_eq!(collect_range(1, Some(6), Some(2)), [1, 3, 5]);
    assert_eq!(collect_range(-1, Some(-7), Some(-3)), [-1, -4, -7]);
    assert!(
        collect_range(1, Some(5), Some(-1)).is_empty(),
        "A step pointing away from the end should produce nothing."
    );
    assert!(collect_range(5, Some(1), Some(2)).is_empty());
}

#[test]
fn test_range_overflow_and_exhaustion() {
    let values: Vec<_> = create_range_iterator(i64::MAX - 1, Some(i64::MAX), None).collect();
    assert_eq!(
        values,
        [i64::MAX - 1, i64::MAX],
        "Overflowing the cursor should end the range after the last value."
    );

    let mut range = create_range_iterator(1, Some(2), None);
    assert_eq!(range.pull(), Step::Next(1));
    assert_eq!(range.pull(), Step::Next(2));
    assert_eq!(range.pull(), Step::done());
    assert_eq!(range.pull(), Step::done(), "An exhausted range should stay done.");
}

#[test]
fn test_early_stop_on_array() {
    let mut seen = Vec::new();
    for_each_iteration(&[0, 1, 2, 3], |&value, index| {
        seen.push((value, index));
        if value == 1 { -1 } else { 0 }
    });
    assert_eq!(seen, [(0, 0), (1, 1)], "Only the first two values should be visited.");
}

#[test]
fn test_early_stop_on_iterator() {
    let (pulls, closes, throws) = (CallCounter::new(), CallCounter::new(), CallCounter::new());
    let mut iter = instrumented(4, &pulls, &closes, &throws);

    let mut seen = Vec::new();
    for_each_iteration(&mut iter, |&value, _| {
        seen.push(value);
        if value == 1 { Control::Stop } else { Control::Continue }
    });

    assert_eq!(seen, [0, 1]);
    assert_eq!(pulls.get(), 2, "Nothing should be pulled after the callback stops.");
    assert_eq!(closes.get(), 1, "The iterator should be closed once.");
    assert_eq!(throws.get(), 0);

    for_each_iteration(&mut iter, |_, _| ());
    assert_eq!(pulls.get(), 5, "The iterator should resume where it left off, then finish.");
    assert_eq!(closes.get(), 1, "Running to the end shouldn't close the iterator.");
}

#[test]
fn test_close_receives_last_step() {
    let last = Rc::new(RefCell::new(None));
    let recorded = last.clone();
    let context = IteratorContext::new(0_u8, |_| false, |_| 'x').on_return(move |_, step| {
        *recorded.borrow_mut() = Some(step);
        Step::Done(Some('z'))
    });
    let mut iter = create_iterable(context);

    for_each_iteration(&mut iter, |_, index| {
        if index == 2 { Control::Stop } else { Control::Continue }
    });
    assert_eq!(*last.borrow(), Some(Step::Next('x')));
    assert_eq!(iter.close(Step::done()), Some(Step::Done(Some('z'))));

    let mut plain = create_range_iterator(0, Some(3), None);
    assert!(!plain.has_return());
    assert_eq!(plain.close(Step::done()), None, "No hook means no return method.");
}

#[test]
fn test_empty_sequences() {
    let mut calls = 0;
    for_each_iteration(None::<&[i32]>, |_, _| calls += 1);
    for_each_iteration(&Value::Null, |_, _| calls += 1);
    for_each_iteration(&Value::Undefined, |_, _| calls += 1);
    for_each_iteration(&Value::Number(3.0), |_, _| calls += 1);
    for_each_iteration(Sequence::<i32>::Empty, |_, _| calls += 1);
    assert_eq!(calls, 0, "Absent or non-iterable sources should be treated as empty.");

    let empty: Vec<u8> = create_array_iterator(None).collect();
    assert!(empty.is_empty());
}

#[test]
fn test_value_arrays() {
    let array = ArrayRef::with_len(4);
    array.set(1, "one");
    array.set(3, "three");

    let mut seen = Vec::new();
    for_each_iteration(&array, |value, index| {
        seen.push((value.clone(), index));
        array.push("late");
    });

    assert_eq!(
        seen,
        [(Value::string("one"), 1), (Value::string("three"), 3)],
        "Holes and elements added during iteration should be skipped."
    );
    assert_eq!(array.len(), 6);
}

#[test]
fn test_callback_errors() {
    let (pulls, closes, throws) = (CallCounter::new(), CallCounter::new(), CallCounter::new());
    let mut iter = instrumented(10, &pulls, &closes, &throws);

    let result = try_for_each_iteration(&mut iter, |&value, _| {
        if value == 2 {
            return Err(Thrown::msg("two is not allowed"));
        }
        Ok(())
    });

    let Err(error) = result else {
        panic!("the callback error should be returned");
    };
    assert_eq!(error.to_string(), "two is not allowed");
    assert_eq!(throws.get(), 1, "The error should pass through the throw hook.");
    assert_eq!(pulls.get(), 3);
    assert_eq!(closes.get(), 0);

    let replaced = IteratorContext::new(
        false,
        |done: &mut bool| std::mem::replace(done, true),
        |_| 1,
    )
    .on_throw(|_, _| Thrown::msg("replaced"));
    let result = try_for_each_iteration(create_iterator(replaced), |_, _| {
        Err::<(), _>(Thrown::msg("original"))
    });
    assert_eq!(
        result.map_err(|error| error.to_string()),
        Err(String::from("replaced")),
        "The throw hook should be able to replace the error."
    );

    let result = try_for_each_iteration(&[1, 2], |_, _| -> Result<(), Thrown> {
        let parsed: i32 = "nope".parse()?;
        let _ = parsed;
        Ok(())
    });
    let Err(error) = result else {
        panic!("an array callback error should be returned");
    };
    assert!(error.is::<std::num::ParseIntError>());
}

#[test]
fn test_callback_error_without_throw_hook() {
    let closes = CallCounter::new();
    let counted = closes.clone();
    let context = IteratorContext::new(0_u8, |_| false, |_| 'x').on_return(move |_, last| {
        counted.bump();
        last
    });
    let mut iter = create_iterator(context);
    assert!(!iter.has_throw());

    let result = try_for_each_iteration(&mut iter, |_, _| Err::<(), _>(Thrown::msg("failed")));
    assert_eq!(result.map_err(|error| error.to_string()), Err(String::from("failed")));
    assert_eq!(closes.get(), 0, "A failing callback shouldn't close the iterator.");
}

#[test]
fn test_iterable_capabilities() {
    let mut iterable = create_array_iterator(Some(&[1, 2, 3][..]));
    assert_eq!(iterable.iter().next(), Some(1));

    let mut rest = Vec::new();
    for value in &mut iterable {
        rest.push(value);
    }
    assert_eq!(rest, [2, 3]);
    assert_eq!(iterable.pull(), Step::done(), "An array iterator should be one-shot.");

    let mut source = vec![String::from("a")];
    let snapshot = create_array_iterator(Some(source.as_slice()));
    source.push(String::from("b"));
    assert_eq!(snapshot.count(), 1, "Later changes to the source shouldn't be seen.");
}

#[test]
fn test_std_iterables() {
    let mut seen = Vec::new();
    for_each_iteration(Sequence::iterable("abc".chars()), |&c, index| seen.push((c, index)));
    assert_eq!(seen, [('a', 0), ('b', 1), ('c', 2)]);

    let mut total = 0;
    for_each_iteration(pull_from(1..=4), |value, _| total += value);
    assert_eq!(total, 10);
}

#[test]
fn test_arr_append() {
    let target = ArrayRef::new();
    arr_append(&target, &Value::Null);
    arr_append(&target, &Value::Number(1.0));
    arr_append(&target, &Value::array([2, 3]));
    assert_eq!(target.len(), 3);

    arr_append(&target, &Value::Array(target.clone()));
    assert_eq!(target.len(), 6, "Appending an array to itself should copy it once.");

    arr_append_from(&target, create_array_iterator(Some(&[Value::Bool(true)][..])));
    assert_eq!(target.get(6), Some(Value::Bool(true)));
}

#[test]
fn test_thrown() {
    let thrown = Thrown::msg("boom");
    assert!(thrown.is::<ThrownMessage>());
    assert_eq!(
        thrown.downcast_ref::<ThrownMessage>(),
        Some(&ThrownMessage {
            message: String::from("boom")
        })
    );
    assert_eq!(Control::from(()), Control::Continue);
    assert_eq!(Control::from_sentinel(0), Control::Continue);
    assert_eq!(Control::from(-1), Control::Stop);
    assert_eq!(Control::from(7), Control::Continue);
}
