//! The timed loops.
//!
//! Each routine sweeps a view front to back `loops` times, touching every
//! index once per sweep, and never allocates.

use core::hint::black_box;

use crate::Result;
use crate::views::ElementAccess;

/// How much of the loop the optimizer is allowed to see through.
pub trait Barrier {
    fn hide<T>(value: T) -> T;
}

/// Passes every value through [`black_box`].
pub struct Opaque;

impl Barrier for Opaque {
    #[inline(always)]
    fn hide<T>(value: T) -> T {
        black_box(value)
    }
}

/// Leaves values alone.
pub struct Transparent;

impl Barrier for Transparent {
    #[inline(always)]
    fn hide<T>(value: T) -> T {
        value
    }
}

/// Reads every element `loops` times and returns the last value read.
///
/// Performs exactly `loops * view.len()` reads.
#[inline(never)]
pub fn read_all<B, V>(view: &V, loops: usize) -> Result<V::Elem>
where
    B: Barrier,
    V: ElementAccess,
    V::Elem: Default,
{
    let mut last = V::Elem::default();
    for _ in 0..loops {
        for index in 0..view.len() {
            last = B::hide(view.get(B::hide(index))?);
        }
    }
    Ok(last)
}

/// Writes `value` to every element `loops` times.
///
/// Performs exactly `loops * view.len()` writes.
#[inline(never)]
pub fn write_all<B, V>(view: &V, loops: usize, value: V::Elem) -> Result<()>
where
    B: Barrier,
    V: ElementAccess,
{
    for _ in 0..loops {
        for index in 0..view.len() {
            view.set(B::hide(index), B::hide(value))?;
        }
    }
    Ok(())
}
