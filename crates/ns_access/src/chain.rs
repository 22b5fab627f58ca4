use core::fmt;
use core::marker::PhantomData;

use crate::error::{BreakCause, Broken};
use crate::getter::{Getter, Required};
use crate::path::{Empty, Path, Step};

// -----------------------------------------------------------------------------
// Chain

/// A root value and the accessors to apply to it, resolved lazily.
///
/// Nothing is invoked until a terminal method ([`fetch`](Self::fetch),
/// [`fetch_or`](Self::fetch_or), [`is_present`](Self::is_present),
/// [`locate`](Self::locate), ...) is called. Resolution then:
///
/// 1. yields absent if the root is absent;
/// 2. yields absent if any accessor reference is unset, before invoking any
///    accessor;
/// 3. applies the accessors left to right and stops at the first absent value.
///
/// Every accessor is invoked at most once and never receives an absent input.
///
/// # Example
///
/// ```
/// use ns_access::Chain;
///
/// struct Order { customer: Option<Customer> }
/// struct Customer { address: Option<Address> }
/// struct Address { city: &'static str }
///
/// impl Order {
///     fn customer(&self) -> Option<&Customer> { self.customer.as_ref() }
/// }
///
/// let order = Order {
///     customer: Some(Customer { address: Some(Address { city: "Lyon" }) }),
/// };
///
/// let city = Chain::of(&order)
///     .then(Order::customer)
///     .get(|customer| customer.address.as_ref())
///     .map(|address| address.city)
///     .fetch();
/// assert_eq!(city, Some("Lyon"));
///
/// let nobody = Order { customer: None };
/// let city = Chain::of(&nobody)
///     .then(Order::customer)
///     .get(|customer| customer.address.as_ref())
///     .map(|address| address.city)
///     .fetch_or("unknown");
/// assert_eq!(city, "unknown");
/// ```
#[must_use = "a chain does nothing until it is fetched"]
pub struct Chain<T, P = Empty, M = ()> {
    root: Option<T>,
    path: P,
    _marker: PhantomData<fn() -> M>,
}

impl<T> Chain<T> {
    /// Starts a chain from a root value that may be absent.
    #[inline]
    pub const fn new(root: Option<T>) -> Self {
        Self {
            root,
            path: Empty,
            _marker: PhantomData,
        }
    }

    /// Starts a chain from a present root value.
    #[inline]
    pub const fn of(root: T) -> Self {
        Self::new(Some(root))
    }
}

impl<T, P, M> Chain<T, P, M>
where
    P: Path<T, M>,
{
    /// Appends an accessor.
    ///
    /// Accepts anything implementing [`Getter`], including an unset
    /// `Option<G>` and [`required`](crate::required) links.
    #[inline]
    pub fn then<G, MG>(self, getter: G) -> Chain<T, Step<P, G>, (M, MG)>
    where
        G: Getter<P::Out, MG>,
    {
        Chain {
            root: self.root,
            path: Step::new(self.path, getter),
            _marker: PhantomData,
        }
    }

    /// Appends an accessor written as a closure whose result may be absent.
    #[inline]
    pub fn get<U, F>(self, f: F) -> Chain<T, Step<P, F>, (M, fn(P::Out) -> Option<U>)>
    where
        F: FnOnce(P::Out) -> Option<U>,
    {
        self.then::<F, fn(P::Out) -> Option<U>>(f)
    }

    /// Appends an accessor written as a closure whose result is always present.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Chain<T, Step<P, Required<F>>, (M, Required<fn(P::Out) -> U>)>
    where
        F: FnOnce(P::Out) -> U,
    {
        self.then::<Required<F>, Required<fn(P::Out) -> U>>(Required(f))
    }

    /// Number of accessors in the chain.
    #[inline]
    pub const fn depth(&self) -> usize {
        P::DEPTH
    }

    /// Resolves the chain, reporting where it broke if the result is absent.
    ///
    /// ```
    /// use ns_access::{BreakCause, Broken, Chain};
    ///
    /// fn halve(x: u32) -> Option<u32> {
    ///     (x % 2 == 0).then_some(x / 2)
    /// }
    ///
    /// let broken = Chain::of(12).then(halve).then(halve).then(halve).locate();
    /// assert_eq!(broken, Err(Broken { step: 3, cause: BreakCause::AbsentValue }));
    /// ```
    pub fn locate(self) -> Result<P::Out, Broken> {
        let resolved = self.resolve();

        #[cfg(all(feature = "debug", debug_assertions))]
        if let Err(broken) = &resolved {
            log::trace!("{broken} (of {})", P::DEPTH);
        }

        resolved
    }

    #[inline]
    fn resolve(self) -> Result<P::Out, Broken> {
        let Some(root) = self.root else {
            return Err(Broken::new(0, BreakCause::AbsentRoot));
        };

        if let Some(step) = self.path.first_unset() {
            return Err(Broken::new(step, BreakCause::UnsetGetter));
        }

        self.path.walk(root)
    }

    /// Resolves the chain to its final value, or `None`.
    #[inline]
    pub fn fetch(self) -> Option<P::Out> {
        self.locate().ok()
    }

    /// Resolves the chain, substituting `default` for absence.
    #[inline]
    pub fn fetch_or(self, default: P::Out) -> P::Out {
        self.fetch().unwrap_or(default)
    }

    /// Resolves the chain, computing a fallback for absence.
    #[inline]
    pub fn fetch_or_else(self, default: impl FnOnce() -> P::Out) -> P::Out {
        self.fetch().unwrap_or_else(default)
    }

    /// Returns `true` if the chain resolves to a value.
    #[inline]
    pub fn is_present(self) -> bool {
        self.fetch().is_some()
    }
}

impl<T, P, M> fmt::Debug for Chain<T, P, M>
where
    P: Path<T, M>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("root_present", &self.root.is_some())
            .field("depth", &P::DEPTH)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Variable-length macros

/// Fetches a value through any number of accessors.
///
/// `fetch_chain!(root, g1, g2, ..., gn)` is
/// `Chain::new(root).then(g1).then(g2)...then(gn).fetch()`.
///
/// ```
/// use ns_access::fetch_chain;
///
/// fn inc(x: u8) -> Option<u8> {
///     x.checked_add(1)
/// }
///
/// assert_eq!(fetch_chain!(Some(0), inc, inc, inc), Some(3));
/// assert_eq!(fetch_chain!(Some(254), inc, inc), None);
/// assert_eq!(fetch_chain!(None::<u8>, inc), None);
/// ```
#[macro_export]
macro_rules! fetch_chain {
    ($root:expr, $($getter:expr),+ $(,)?) => {
        $crate::Chain::new($root)$(.then($getter))+.fetch()
    };
}

/// Returns `true` if [`fetch_chain!`] with the same arguments yields a value.
#[macro_export]
macro_rules! is_chain_present {
    ($root:expr, $($getter:expr),+ $(,)?) => {
        $crate::Chain::new($root)$(.then($getter))+.is_present()
    };
}

/// [`fetch_chain!`] with a fallback: `fetch_chain_or_default!(root, default, g1, ..., gn)`.
#[macro_export]
macro_rules! fetch_chain_or_default {
    ($root:expr, $default:expr, $($getter:expr),+ $(,)?) => {
        $crate::Chain::new($root)$(.then($getter))+.fetch_or($default)
    };
}

// -----------------------------------------------------------------------------
// Tests
