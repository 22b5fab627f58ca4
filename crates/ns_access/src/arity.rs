//! Fixed-arity shorthands for chains of 1 to 9 accessors.
//!
//! Each function is a thin call-through to [`Chain`]; longer chains use the
//! builder or [`fetch_chain!`](crate::fetch_chain) directly.

use crate::chain::Chain;
use crate::getter::Getter;

macro_rules! impl_fixed_arity {
    (
        $n:literal: $fetch:ident, $present:ident, $or_default:ident;
        $Root:ident => $Last:ident;
        $($getter:ident: $G:ident<$In:ident => $Out:ident, $M:ident>),+
    ) => {
        #[doc = concat!("Fetches the value ", stringify!($n), " accessor(s) deep, or `None`.")]
        ///
        /// Yields `None` without invoking anything if the root or any accessor
        /// reference is unset; otherwise stops at the first absent value.
        #[inline]
        pub fn $fetch<$Root, $($Out,)+ $($G, $M,)+>(
            root: Option<$Root>,
            $($getter: $G,)+
        ) -> Option<$Last>
        where
            $($G: Getter<$In, $M, Out = $Out>,)+
        {
            Chain::new(root)$(.then::<$G, $M>($getter))+.fetch()
        }

        #[doc = concat!("Returns `true` if [`", stringify!($fetch), "`] yields a value.")]
        #[inline]
        pub fn $present<$Root, $($Out,)+ $($G, $M,)+>(
            root: Option<$Root>,
            $($getter: $G,)+
        ) -> bool
        where
            $($G: Getter<$In, $M, Out = $Out>,)+
        {
            $fetch(root, $($getter,)+).is_some()
        }

        #[doc = concat!("[`", stringify!($fetch), "`] substituting `default` for absence.")]
        #[inline]
        pub fn $or_default<$Root, $($Out,)+ $($G, $M,)+>(
            root: Option<$Root>,
            default: $Last,
            $($getter: $G,)+
        ) -> $Last
        where
            $($G: Getter<$In, $M, Out = $Out>,)+
        {
            $fetch(root, $($getter,)+).unwrap_or(default)
        }
    };
}

impl_fixed_arity! {
    1: fetch_chain_1, is_chain_present_1, fetch_chain_or_default_1;
    T0 => T1;
    g1: G1<T0 => T1, M1>
}

impl_fixed_arity! {
    2: fetch_chain_2, is_chain_present_2, fetch_chain_or_default_2;
    T0 => T2;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>
}

impl_fixed_arity! {
    3: fetch_chain_3, is_chain_present_3, fetch_chain_or_default_3;
    T0 => T3;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>
}

impl_fixed_arity! {
    4: fetch_chain_4, is_chain_present_4, fetch_chain_or_default_4;
    T0 => T4;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>,
    g4: G4<T3 => T4, M4>
}

impl_fixed_arity! {
    5: fetch_chain_5, is_chain_present_5, fetch_chain_or_default_5;
    T0 => T5;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>,
    g4: G4<T3 => T4, M4>, g5: G5<T4 => T5, M5>
}

impl_fixed_arity! {
    6: fetch_chain_6, is_chain_present_6, fetch_chain_or_default_6;
    T0 => T6;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>,
    g4: G4<T3 => T4, M4>, g5: G5<T4 => T5, M5>, g6: G6<T5 => T6, M6>
}

impl_fixed_arity! {
    7: fetch_chain_7, is_chain_present_7, fetch_chain_or_default_7;
    T0 => T7;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>,
    g4: G4<T3 => T4, M4>, g5: G5<T4 => T5, M5>, g6: G6<T5 => T6, M6>,
    g7: G7<T6 => T7, M7>
}

impl_fixed_arity! {
    8: fetch_chain_8, is_chain_present_8, fetch_chain_or_default_8;
    T0 => T8;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>,
    g4: G4<T3 => T4, M4>, g5: G5<T4 => T5, M5>, g6: G6<T5 => T6, M6>,
    g7: G7<T6 => T7, M7>, g8: G8<T7 => T8, M8>
}

impl_fixed_arity! {
    9: fetch_chain_9, is_chain_present_9, fetch_chain_or_default_9;
    T0 => T9;
    g1: G1<T0 => T1, M1>, g2: G2<T1 => T2, M2>, g3: G3<T2 => T3, M3>,
    g4: G4<T3 => T4, M4>, g5: G5<T4 => T5, M5>, g6: G6<T5 => T6, M6>,
    g7: G7<T6 => T7, M7>, g8: G8<T7 => T8, M8>, g9: G9<T8 => T9, M9>
}

// -----------------------------------------------------------------------------
// Tests
