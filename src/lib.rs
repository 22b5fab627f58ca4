#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ns_access as access;

/// The accessors most code needs, in one import.
pub mod prelude {
    pub use ns_access::{Chain, Fault, OptionExt, ResultExt, required};
    pub use ns_access::{fetch_chain, fetch_chain_or_default, is_chain_present};
    pub use ns_access::{fetch_safe, fetch_safe_or_default, is_present};
    pub use ns_access::{try_fetch_safe, try_fetch_safe_or_default, try_is_present};
}
