use crate::Result;
use crate::views::{ArrayView, Buffer, SegmentView, SpanView, TextView};

/// Character every benchmark buffer is filled with.
pub const FILL: char = 'a';

/// Every accessor a case may exercise, all aliasing one buffer.
///
/// Built once per case during setup and dropped at teardown.
pub struct Fixture<'a> {
    pub array: ArrayView<'a, char>,
    pub segment: SegmentView<'a, char>,
    pub text: TextView<'a>,
    pub span_of_array: SpanView<'a, char>,
    pub span_of_segment: SpanView<'a, char>,
    pub span_of_text: SpanView<'a, char>,
}

impl<'a> Fixture<'a> {
    pub fn new(buffer: &'a Buffer<char>) -> Result<Self> {
        let array = buffer.array();
        let segment = buffer.segment(0, buffer.len())?;
        let text = buffer.text();
        Ok(Self {
            array,
            segment,
            text,
            span_of_array: SpanView::from(&array),
            span_of_segment: SpanView::from(&segment),
            span_of_text: SpanView::from(&text),
        })
    }
}
