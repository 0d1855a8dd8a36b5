use core::cell::Cell;

use crate::views::{ArrayView, Buffer, ElementAccess, SegmentView, TextView};
use crate::{Error, Result};

/// Non-owning, bounds-checked view over a contiguous run of elements.
///
/// A span is two words (pointer and length) and can be built from a buffer
/// or from any other view without copying: a span over a segment points
/// straight at the segment's first element, so accesses need no offset.
pub struct SpanView<'a, T> {
    cells: &'a [Cell<T>],
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(SpanView<'static, char>, [usize; 2]);
static_assertions::assert_not_impl_any!(SpanView<'static, char>: Send, Sync);

impl<'a, T> SpanView<'a, T> {
    pub(crate) fn new(cells: &'a [Cell<T>]) -> Self {
        Self { cells }
    }

    /// Narrows the span to `len` elements starting at `offset`.
    ///
    /// A window past the end is a setup failure, like an out-of-range segment.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self> {
        match offset.checked_add(len) {
            Some(end) if end <= self.cells.len() => Ok(Self {
                cells: &self.cells[offset..end],
            }),
            _ => Err(Error::setup(format!(
                "span {offset}..{} out of range for view of length {}",
                offset.saturating_add(len),
                self.cells.len()
            ))),
        }
    }

    pub fn as_cells(&self) -> &'a [Cell<T>] {
        self.cells
    }
}

impl<T> Clone for SpanView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for SpanView<'_, T> {}

impl<'a, T: Copy> From<&'a Buffer<T>> for SpanView<'a, T> {
    fn from(buffer: &'a Buffer<T>) -> Self {
        Self::new(buffer.as_cells())
    }
}

impl<'a, T> From<&ArrayView<'a, T>> for SpanView<'a, T> {
    fn from(array: &ArrayView<'a, T>) -> Self {
        Self::new(array.as_cells())
    }
}

impl<'a, T> From<&SegmentView<'a, T>> for SpanView<'a, T> {
    fn from(segment: &SegmentView<'a, T>) -> Self {
        Self::new(segment.as_cells())
    }
}

impl<'a> From<&TextView<'a>> for SpanView<'a, char> {
    fn from(text: &TextView<'a>) -> Self {
        Self::new(text.as_cells())
    }
}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for SpanView<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}

impl<T: Copy> ElementAccess for SpanView<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Result<T> {
        self.cells.get(index).map(Cell::get).ok_or(Error::Access {
            index,
            len: self.cells.len(),
        })
    }

    #[inline(always)]
    fn set(&self, index: usize, value: T) -> Result<()> {
        let len = self.cells.len();
        let cell = self.cells.get(index).ok_or(Error::Access { index, len })?;
        cell.set(value);
        Ok(())
    }
}
