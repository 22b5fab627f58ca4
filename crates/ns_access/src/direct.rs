//! Absence-safe evaluation of a single operation.
//!
//! The operation may chain any number of unchecked accesses with `?`; the
//! first unset value anywhere in it makes the whole result absent. Panics
//! raised by the operation are not caught.

use crate::error::Fault;

// -----------------------------------------------------------------------------
// Infallible operations

/// Runs `op` once and returns its value, or `None` if it met an absent value.
///
/// ```
/// use ns_access::fetch_safe;
///
/// struct Invoice { buyer: Option<Buyer> }
/// struct Buyer { vat_id: Option<&'static str> }
///
/// let invoice = Invoice { buyer: Some(Buyer { vat_id: None }) };
/// assert_eq!(fetch_safe(|| invoice.buyer.as_ref()?.vat_id), None);
/// ```
#[inline]
pub fn fetch_safe<V>(op: impl FnOnce() -> Option<V>) -> Option<V> {
    op()
}

/// Runs `op` once, substituting `default` if it met an absent value.
#[inline]
pub fn fetch_safe_or_default<V>(op: impl FnOnce() -> Option<V>, default: V) -> V {
    fetch_safe(op).unwrap_or(default)
}

/// Runs `op` once and reports whether it produced a value.
#[inline]
pub fn is_present<V>(op: impl FnOnce() -> Option<V>) -> bool {
    fetch_safe(op).is_some()
}

// -----------------------------------------------------------------------------
// Fallible operations

/// Runs `op` once, turning [`Fault::Absent`] into `Ok(None)`.
///
/// Any [`Fault::Foreign`] error is returned as `Err` unchanged.
///
/// ```
/// use ns_access::{try_fetch_safe, OptionExt, ResultExt};
///
/// fn parse_port(raw: Option<&str>) -> Result<Option<u16>, core::num::ParseIntError> {
///     try_fetch_safe(|| raw.present()?.parse::<u16>().foreign())
/// }
///
/// assert_eq!(parse_port(Some("8080")), Ok(Some(8080)));
/// assert_eq!(parse_port(None), Ok(None));
/// assert!(parse_port(Some("http")).is_err());
/// ```
pub fn try_fetch_safe<V, E>(op: impl FnOnce() -> Result<V, Fault<E>>) -> Result<Option<V>, E> {
    match op() {
        Ok(value) => Ok(Some(value)),
        Err(Fault::Absent) => Ok(None),
        Err(Fault::Foreign(e)) => Err(e),
    }
}

/// [`try_fetch_safe`] substituting `default` for absence.
#[inline]
pub fn try_fetch_safe_or_default<V, E>(
    op: impl FnOnce() -> Result<V, Fault<E>>,
    default: V,
) -> Result<V, E> {
    Ok(try_fetch_safe(op)?.unwrap_or(default))
}

/// [`try_fetch_safe`] reporting presence only.
#[inline]
pub fn try_is_present<V, E>(op: impl FnOnce() -> Result<V, Fault<E>>) -> Result<bool, E> {
    Ok(try_fetch_safe(op)?.is_some())
}

// -----------------------------------------------------------------------------
// Tests
