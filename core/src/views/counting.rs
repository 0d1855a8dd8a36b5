use core::cell::Cell;

use crate::Result;
use crate::views::ElementAccess;

/// Wraps a view and counts every `get` and `set` made through it.
///
/// Used to check that a routine performs exactly the number of element
/// accesses it claims to. Failed accesses are counted too.
pub struct Counting<V> {
    inner: V,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl<V> Counting<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn reset(&self) {
        self.reads.set(0);
        self.writes.set(0);
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: ElementAccess> ElementAccess for Counting<V> {
    type Elem = V::Elem;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Result<Self::Elem> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(index)
    }

    fn set(&self, index: usize, value: Self::Elem) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(index, value)
    }
}
