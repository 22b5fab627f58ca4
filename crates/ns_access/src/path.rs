//! The type-level list of accessors carried by a [`Chain`](crate::Chain).
//!
//! A path is built back to front: [`Empty`] is the path of length zero and
//! [`Step<P, G>`] appends getter `G` to path `P`. Every step is statically
//! typed against the output of the previous one, so a chain of any length is
//! walked by the same two implementations.

use crate::error::{BreakCause, Broken};
use crate::getter::Getter;

mod seal {
    pub trait Sealed {}

    impl Sealed for super::Empty {}
    impl<P, G> Sealed for super::Step<P, G> {}
}

// -----------------------------------------------------------------------------
// Path

/// An ordered sequence of accessors starting from a value of type `In`.
///
/// This trait is sealed.
pub trait Path<In, Marker>: seal::Sealed {
    /// The value produced by the last accessor.
    type Out;

    /// Number of accessors in the path.
    const DEPTH: usize;

    /// Position (1-based) of the first unset accessor, if any.
    fn first_unset(&self) -> Option<usize>;

    /// Applies every accessor left to right, stopping at the first absence.
    fn walk(self, input: In) -> Result<Self::Out, Broken>;
}

/// The path without accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<In> Path<In, ()> for Empty {
    type Out = In;

    const DEPTH: usize = 0;

    #[inline(always)]
    fn first_unset(&self) -> Option<usize> {
        None
    }

    #[inline(always)]
    fn walk(self, input: In) -> Result<In, Broken> {
        Ok(input)
    }
}

/// Path `P` followed by getter `G`.
#[derive(Debug, Clone, Copy)]
pub struct Step<P, G> {
    prev: P,
    getter: G,
}

impl<P, G> Step<P, G> {
    #[inline(always)]
    pub(crate) const fn new(prev: P, getter: G) -> Self {
        Self { prev, getter }
    }
}

impl<In, P, G, MP, MG> Path<In, (MP, MG)> for Step<P, G>
where
    P: Path<In, MP>,
    G: Getter<P::Out, MG>,
{
    type Out = G::Out;

    const DEPTH: usize = P::DEPTH + 1;

    #[inline]
    fn first_unset(&self) -> Option<usize> {
        match self.prev.first_unset() {
            Some(step) => Some(step),
            None if !self.getter.is_set() => Some(P::DEPTH + 1),
            None => None,
        }
    }

    #[inline]
    fn walk(self, input: In) -> Result<Self::Out, Broken> {
        let value = self.prev.walk(input)?;
        self.getter
            .get(value)
            .ok_or(Broken::new(P::DEPTH + 1, BreakCause::AbsentValue))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::{Empty, Path, Step};
    use crate::error::{BreakCause, Broken};

    fn double(x: u32) -> Option<u32> {
        x.checked_mul(2)
    }

    fn depth<In, M, P: Path<In, M>>(_: &P) -> usize {
        P::DEPTH
    }

    #[test]
    fn empty_path_is_identity() {
        assert_eq!(<Empty as Path<u8, ()>>::DEPTH, 0);
        assert_eq!(Path::<u8, ()>::walk(Empty, 5), Ok(5));
    }

    #[test]
    fn walk_in_order() {
        let path = Step::new(Step::new(Step::new(Empty, double), double), double);
        assert_eq!(depth::<u32, _, _>(&path), 3);
        assert_eq!(Path::<u32, _>::first_unset(&path), None);
        assert_eq!(Path::<u32, _>::walk(path, 1), Ok(8));
    }

    #[test]
    fn walk_stops_at_first_absence() {
        let calls = Cell::new(0);
        let tail = |x: u32| {
            calls.set(calls.get() + 1);
            Some(x)
        };

        let path = Step::new(Step::new(Empty, double), tail);
        assert_eq!(
            Path::<u32, _>::walk(path, u32::MAX),
            Err(Broken::new(1, BreakCause::AbsentValue))
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn first_unset_reports_leftmost() {
        let unset: Option<fn(u32) -> Option<u32>> = None;
        let path = Step::new(Step::new(Step::new(Empty, double), unset), unset);
        assert_eq!(Path::<u32, _>::first_unset(&path), Some(2));
    }
}
