use core::cell::Cell;
use core::fmt;

use crate::views::ElementAccess;
use crate::{Error, Result};

/// Character-sequence accessor with textual conveniences.
///
/// Elements are stored as `char`, so indexing is by character rather than by
/// UTF-8 byte and stays O(1).
pub struct TextView<'a> {
    chars: &'a [Cell<char>],
}

impl<'a> TextView<'a> {
    pub(crate) fn new(chars: &'a [Cell<char>]) -> Self {
        Self { chars }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + use<'a> {
        self.chars.iter().map(Cell::get)
    }

    /// Compares the current contents against `text`.
    pub fn eq_str(&self, text: &str) -> bool {
        self.chars().eq(text.chars())
    }

    pub fn as_cells(&self) -> &'a [Cell<char>] {
        self.chars
    }
}

impl Clone for TextView<'_> {
    fn clone(&self) -> Self {
        *self
    }
}
impl Copy for TextView<'_> {}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in self.chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.chars() {
            fmt::Display::fmt(&c.escape_debug(), f)?;
        }
        f.write_str("\"")
    }
}

impl ElementAccess for TextView<'_> {
    type Elem = char;

    #[inline(always)]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Result<char> {
        match self.chars.get(index) {
            Some(cell) => Ok(cell.get()),
            None => Err(Error::Access {
                index,
                len: self.chars.len(),
            }),
        }
    }

    #[inline(always)]
    fn set(&self, index: usize, value: char) -> Result<()> {
        match self.chars.get(index) {
            Some(cell) => {
                cell.set(value);
                Ok(())
            }
            None => Err(Error::Access {
                index,
                len: self.chars.len(),
            }),
        }
    }
}
