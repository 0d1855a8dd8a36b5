use core::cell::Cell;

use crate::views::{ArrayView, SegmentView, SpanView, TextView};
use crate::{Error, Result};

/// Largest buffer length accepted by [`Buffer`] constructors (16M elements).
pub const MAX_LENGTH: usize = 1 << 24;

/// Owning, fixed-length element storage.
///
/// Elements live in `Cell`s so that several views can alias the buffer and
/// still write through a shared borrow. The length is fixed at construction.
pub struct Buffer<T> {
    cells: Box<[Cell<T>]>,
}

static_assertions::assert_not_impl_any!(Buffer<char>: Sync);

fn check_length(len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::setup("buffer length must be non-zero"));
    }
    if len > MAX_LENGTH {
        return Err(Error::setup(format!(
            "buffer length {len} exceeds the maximum of {MAX_LENGTH}"
        )));
    }
    Ok(())
}

impl<T: Copy> Buffer<T> {
    /// Allocates `len` elements, all set to `value`.
    pub fn filled(len: usize, value: T) -> Result<Self> {
        check_length(len)?;
        Ok(Self {
            cells: (0..len).map(|_| Cell::new(value)).collect(),
        })
    }

    /// Takes ownership of `values` as the buffer contents.
    pub fn from_vec(values: Vec<T>) -> Result<Self> {
        check_length(values.len())?;
        Ok(Self {
            cells: values.into_iter().map(Cell::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().map(Cell::get).collect()
    }

    pub fn as_cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    /// Direct accessor over the whole buffer.
    pub fn array(&self) -> ArrayView<'_, T> {
        ArrayView::new(&self.cells)
    }

    /// Window of `len` elements starting at `offset`.
    pub fn segment(&self, offset: usize, len: usize) -> Result<SegmentView<'_, T>> {
        SegmentView::new(&self.cells, offset, len)
    }

    /// Span over the whole buffer.
    pub fn span(&self) -> SpanView<'_, T> {
        SpanView::new(&self.cells)
    }
}

impl Buffer<char> {
    /// Builds a character buffer from `text`, one element per `char`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_vec(text.chars().collect())
    }

    /// Textual accessor over the whole buffer.
    pub fn text(&self) -> TextView<'_> {
        TextView::new(&self.cells)
    }
}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}
