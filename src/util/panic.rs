/// Asserts that running `$run` panics. The block is wrapped in `AssertUnwindSafe`, so it may
/// capture mutable state such as counters or iterators.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
    };
}

pub(crate) use assert_panics;
