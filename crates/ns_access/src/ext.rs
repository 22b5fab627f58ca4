//! Adapters that let `?` sort failures into [`Fault`] inside an operation
//! passed to [`try_fetch_safe`](crate::try_fetch_safe).

use crate::{Absent, Fault};

mod seal {
    pub trait Sealed {}

    impl<T> Sealed for Option<T> {}
    impl<T, E> Sealed for Result<T, E> {}
}

/// Turns an unset [`Option`] into the absence condition.
pub trait OptionExt<T>: seal::Sealed {
    /// Returns the value, or [`Absent`] if there is none.
    ///
    /// ```
    /// use ns_access::{Absent, OptionExt};
    ///
    /// assert_eq!(Some(1).present(), Ok(1));
    /// assert_eq!(None::<u8>.present(), Err(Absent));
    /// ```
    fn present(self) -> Result<T, Absent>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn present(self) -> Result<T, Absent> {
        self.ok_or(Absent)
    }
}

/// Marks an error as unrelated to absence, so it is never swallowed.
pub trait ResultExt<T, E>: seal::Sealed {
    /// Wraps the error as [`Fault::Foreign`].
    fn foreign(self) -> Result<T, Fault<E>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn foreign(self) -> Result<T, Fault<E>> {
        self.map_err(Fault::Foreign)
    }
}

// -----------------------------------------------------------------------------
// Tests
