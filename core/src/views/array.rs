use core::cell::Cell;

use crate::views::ElementAccess;
use crate::{Error, Result};

/// Direct indexed access to a whole buffer.
pub struct ArrayView<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> ArrayView<'a, T> {
    pub(crate) fn new(cells: &'a [Cell<T>]) -> Self {
        Self { cells }
    }

    pub fn as_cells(&self) -> &'a [Cell<T>] {
        self.cells
    }
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for ArrayView<'_, T> {}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}

impl<T: Copy> ElementAccess for ArrayView<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Result<T> {
        if index >= self.cells.len() {
            return Err(Error::Access {
                index,
                len: self.cells.len(),
            });
        }
        Ok(self.cells[index].get())
    }

    #[inline(always)]
    fn set(&self, index: usize, value: T) -> Result<()> {
        if index >= self.cells.len() {
            return Err(Error::Access {
                index,
                len: self.cells.len(),
            });
        }
        self.cells[index].set(value);
        Ok(())
    }
}
