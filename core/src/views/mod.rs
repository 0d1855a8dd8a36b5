//! Sequential accessors over a shared, fixed-length buffer.
//!
//! Every view in this module borrows the same `[Cell<T>]` storage owned by a
//! [`Buffer`], so any number of views may coexist over one buffer and a
//! `set` through one of them is observed by all others at once. None of them
//! copy the underlying storage.
//!
//! ```text
//! Buffer ──▶ [Cell<T>; len]
//!              ▲   ▲    ▲
//!  ArrayView ──┘   │    └── SpanView (any sub-range)
//!  SegmentView (offset, len)
//! ```
//!
//! The kinds are independent concrete types. They share the [`ElementAccess`]
//! contract so benchmark routines can be written once and monomorphised per
//! kind; nothing dispatches through a vtable.

use core::fmt;

use crate::Result;

mod array;
mod buffer;
mod counting;
mod segment;
mod span;
mod text;

pub use array::ArrayView;
pub use buffer::{Buffer, MAX_LENGTH};
pub use counting::Counting;
pub use segment::SegmentView;
pub use span::SpanView;
pub use text::TextView;

/// Bounds-checked indexed access to a run of elements.
pub trait ElementAccess {
    type Elem: Copy;

    fn len(&self) -> usize;

    /// Returns the element at `index`, or [`Error::Access`](crate::Error::Access)
    /// if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Elem>;

    /// Replaces the element at `index`. Same bounds contract as [`get`](Self::get).
    fn set(&self, index: usize, value: Self::Elem) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The accessor shapes a benchmark case can exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Array,
    Segment,
    Text,
    SpanOfArray,
    SpanOfSegment,
    SpanOfText,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Array,
        ViewKind::Segment,
        ViewKind::Text,
        ViewKind::SpanOfArray,
        ViewKind::SpanOfSegment,
        ViewKind::SpanOfText,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ViewKind::Array => "array",
            ViewKind::Segment => "segment",
            ViewKind::Text => "text",
            ViewKind::SpanOfArray => "span_of_array",
            ViewKind::SpanOfSegment => "span_of_segment",
            ViewKind::SpanOfText => "span_of_text",
        }
    }

    /// Whether the accessor is a span built over another view.
    pub const fn is_span(self) -> bool {
        matches!(
            self,
            ViewKind::SpanOfArray | ViewKind::SpanOfSegment | ViewKind::SpanOfText
        )
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
