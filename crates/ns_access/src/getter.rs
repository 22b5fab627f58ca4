// -----------------------------------------------------------------------------
// Getter

/// A single step of a chain: maps a container to one of its nested values.
///
/// Implemented for:
/// - every `FnOnce(In) -> Option<Out>` (fn items, method paths such as
///   `Order::customer`, closures, boxed functions);
/// - `Option<G>` where `G` is a getter, modelling an accessor reference that
///   may itself be unset;
/// - [`Required<F>`], built by [`required`], for links that always exist.
///
/// `Marker` only keeps the blanket implementations apart and is always
/// inferred; callers never name it.
///
/// Closures passed where a `Getter` is expected cannot have their argument
/// type inferred. Prefer method paths, or [`Chain::get`](crate::Chain::get)
/// which takes a plain closure.
pub trait Getter<In, Marker> {
    /// The value this step produces.
    type Out;

    /// Returns `false` if the accessor reference is unset.
    ///
    /// A chain containing an unset accessor resolves to absent before any
    /// accessor is invoked.
    #[inline]
    fn is_set(&self) -> bool {
        true
    }

    /// Applies the accessor. Called at most once, never on an absent input.
    fn get(self, input: In) -> Option<Self::Out>;
}

impl<In, Out, F> Getter<In, fn(In) -> Option<Out>> for F
where
    F: FnOnce(In) -> Option<Out>,
{
    type Out = Out;

    #[inline]
    fn get(self, input: In) -> Option<Out> {
        self(input)
    }
}

impl<In, G, M> Getter<In, Option<M>> for Option<G>
where
    G: Getter<In, M>,
{
    type Out = G::Out;

    #[inline]
    fn is_set(&self) -> bool {
        self.as_ref().is_some_and(|getter| getter.is_set())
    }

    #[inline]
    fn get(self, input: In) -> Option<Self::Out> {
        self?.get(input)
    }
}

// -----------------------------------------------------------------------------
// Required

/// An accessor whose result is always present.
///
/// See [`required`].
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Required<F>(pub(crate) F);

/// Lifts `FnOnce(In) -> Out` into a [`Getter`] that never yields absence.
///
/// ```
/// use ns_access::{required, Chain};
///
/// struct Line { qty: u32 }
///
/// impl Line {
///     fn qty(&self) -> u32 { self.qty }
/// }
///
/// let line = Line { qty: 4 };
/// let qty = Chain::of(&line).then(required(Line::qty)).fetch();
/// assert_eq!(qty, Some(4));
/// ```
#[inline(always)]
pub const fn required<F>(f: F) -> Required<F> {
    Required(f)
}

impl<In, Out, F> Getter<In, Required<fn(In) -> Out>> for Required<F>
where
    F: FnOnce(In) -> Out,
{
    type Out = Out;

    #[inline]
    fn get(self, input: In) -> Option<Out> {
        Some((self.0)(input))
    }
}

// -----------------------------------------------------------------------------
// Tests
