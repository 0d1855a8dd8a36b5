use core::cell::Cell;

use crate::views::{ArrayView, Buffer, ElementAccess, SpanView};
use crate::{Error, Result};

/// A window of `len` elements starting at `offset` within a buffer.
///
/// Unlike a [`SpanView`](crate::views::SpanView), the segment keeps a
/// reference to the whole backing storage and translates every index by its
/// offset on access.
pub struct SegmentView<'a, T> {
    cells: &'a [Cell<T>],
    offset: usize,
    len: usize,
}

impl<'a, T> SegmentView<'a, T> {
    pub(crate) fn new(cells: &'a [Cell<T>], offset: usize, len: usize) -> Result<Self> {
        match offset.checked_add(len) {
            Some(end) if end <= cells.len() => Ok(Self { cells, offset, len }),
            _ => Err(Error::setup(format!(
                "segment {offset}..{} out of range for buffer of length {}",
                offset.saturating_add(len),
                cells.len()
            ))),
        }
    }

    /// Segment covering all of `buffer`.
    pub fn whole(buffer: &'a Buffer<T>) -> Self
    where
        T: Copy,
    {
        let cells = buffer.as_cells();
        Self {
            cells,
            offset: 0,
            len: cells.len(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Narrows the window; `offset` is relative to this segment.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self> {
        let window = Self::new(&self.cells[self.offset..self.offset + self.len], offset, len)?;
        Ok(Self {
            cells: self.cells,
            offset: self.offset + window.offset,
            len: window.len,
        })
    }

    /// The cells covered by this segment.
    pub fn as_cells(&self) -> &'a [Cell<T>] {
        &self.cells[self.offset..self.offset + self.len]
    }
}

impl<'a, T> From<ArrayView<'a, T>> for SegmentView<'a, T> {
    fn from(array: ArrayView<'a, T>) -> Self {
        let cells = array.as_cells();
        Self {
            cells,
            offset: 0,
            len: cells.len(),
        }
    }
}

impl<T> Clone for SegmentView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for SegmentView<'_, T> {}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for SegmentView<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegmentView")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("elements", &SpanView::from(self))
            .finish()
    }
}

impl<T: Copy> ElementAccess for SegmentView<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::Access {
                index,
                len: self.len,
            });
        }
        Ok(self.cells[self.offset + index].get())
    }

    #[inline(always)]
    fn set(&self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(Error::Access {
                index,
                len: self.len,
            });
        }
        self.cells[self.offset + index].set(value);
        Ok(())
    }
}
