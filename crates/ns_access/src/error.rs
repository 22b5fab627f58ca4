use thiserror::Error;

// -----------------------------------------------------------------------------
// Absent

/// The absence condition: a value that was expected is unset.
///
/// Produced by [`OptionExt::present`](crate::OptionExt::present) and converted
/// into [`Fault::Absent`] by the `?` operator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("value is absent")]
pub struct Absent;

// -----------------------------------------------------------------------------
// Fault

/// Failure raised inside an operation passed to the fallible direct accessors.
///
/// Only two kinds exist. [`Fault::Absent`] is swallowed and turned into
/// `Ok(None)`, [`Fault::Foreign`] is handed back to the caller untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault<E> {
    #[error("value is absent")]
    Absent,

    #[error("{0}")]
    Foreign(E),
}

impl<E> From<Absent> for Fault<E> {
    #[inline]
    fn from(_: Absent) -> Self {
        Fault::Absent
    }
}

impl<E> Fault<E> {
    /// Returns `true` for the absence condition.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Fault::Absent)
    }

    /// Splits the fault into "absent" (`Ok(())`) and the foreign error.
    #[inline]
    pub fn into_foreign(self) -> Result<(), E> {
        match self {
            Fault::Absent => Ok(()),
            Fault::Foreign(e) => Err(e),
        }
    }
}

// -----------------------------------------------------------------------------
// Broken

/// Why a chain resolved to absent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BreakCause {
    #[error("root value is absent")]
    AbsentRoot,

    #[error("accessor is unset")]
    UnsetGetter,

    #[error("accessor returned no value")]
    AbsentValue,
}

/// The location at which a chain resolved to absent.
///
/// `step` is 1-based and counts accessors; `0` designates the root.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("chain is absent at step {step}: {cause}")]
pub struct Broken {
    pub step: usize,
    pub cause: BreakCause,
}

impl Broken {
    #[inline]
    pub(crate) const fn new(step: usize, cause: BreakCause) -> Self {
        Self { step, cause }
    }
}

// -----------------------------------------------------------------------------
// Tests
