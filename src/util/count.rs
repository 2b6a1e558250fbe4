use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

/// A shared call counter for instrumenting closures that must be `'static`, such as iterator
/// context hooks. Clones count into the same cell.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(pub Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> CallCounter {
        CallCounter::default()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

impl Deref for CallCounter {
    type Target = Cell<usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
