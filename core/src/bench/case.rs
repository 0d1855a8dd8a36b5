//! The case table: every view kind crossed with get and set.

use core::fmt;
use core::hint::black_box;

use crate::Result;
use crate::bench::fixture::Fixture;
use crate::bench::routine::{Opaque, Transparent, read_all, write_all};
use crate::bench::target::{Target, TargetId};
use crate::views::{ElementAccess, ViewKind};

/// Operation a case performs on every element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Get,
    Set,
}

impl Op {
    pub const fn name(self) -> &'static str {
        match self {
            Op::Get => "get",
            Op::Set => "set",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One invocation of a case: `target.ops_per_invoke()` element accesses.
pub type Routine = fn(&Fixture<'_>, &Target) -> Result<()>;

/// A named benchmark.
#[derive(Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub kind: ViewKind,
    pub op: Op,
    /// Ratios in a report are relative to the baseline case of each target.
    pub baseline: bool,
    pub routine: Routine,
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("op", &self.op)
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

/// Written by every `set` case.
const SET_VALUE: char = 'b';

fn get<V>(view: &V, target: &Target) -> Result<()>
where
    V: ElementAccess<Elem = char>,
{
    let last = match target.id {
        TargetId::Opaque => read_all::<Opaque, _>(view, target.loops)?,
        TargetId::Transparent => read_all::<Transparent, _>(view, target.loops)?,
    };
    black_box(last);
    Ok(())
}

fn set<V>(view: &V, target: &Target) -> Result<()>
where
    V: ElementAccess<Elem = char>,
{
    match target.id {
        TargetId::Opaque => write_all::<Opaque, _>(view, target.loops, SET_VALUE),
        TargetId::Transparent => write_all::<Transparent, _>(view, target.loops, SET_VALUE),
    }
}

macro_rules! case_table {
    ($( $kind:ident => $field:ident ),* $(,)?) => {
        mod routines {
            $(
                pub(super) mod $field {
                    use crate::Result;
                    use crate::bench::fixture::Fixture;
                    use crate::bench::target::Target;

                    pub fn get(fixture: &Fixture<'_>, target: &Target) -> Result<()> {
                        super::super::get(&fixture.$field, target)
                    }
                    pub fn set(fixture: &Fixture<'_>, target: &Target) -> Result<()> {
                        super::super::set(&fixture.$field, target)
                    }
                }
            )*
        }

        /// The full case table. `array_get` is the baseline.
        pub const CASES: &[Case] = &[
            $(
                Case {
                    name: concat!(stringify!($field), "_get"),
                    kind: ViewKind::$kind,
                    op: Op::Get,
                    baseline: matches!(ViewKind::$kind, ViewKind::Array),
                    routine: routines::$field::get,
                },
                Case {
                    name: concat!(stringify!($field), "_set"),
                    kind: ViewKind::$kind,
                    op: Op::Set,
                    baseline: false,
                    routine: routines::$field::set,
                },
            )*
        ];
    };
}

case_table! {
    Array => array,
    Segment => segment,
    Text => text,
    SpanOfArray => span_of_array,
    SpanOfSegment => span_of_segment,
    SpanOfText => span_of_text,
}

/// Looks up a case in [`CASES`] by name.
pub fn find(name: &str) -> Option<&'static Case> {
    CASES.iter().find(|case| case.name == name)
}
