#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod arity;
mod chain;
mod direct;
mod error;
mod ext;
mod getter;

pub mod path;

// -----------------------------------------------------------------------------
// Top-level exports

pub use chain::Chain;
pub use direct::{fetch_safe, fetch_safe_or_default, is_present};
pub use direct::{try_fetch_safe, try_fetch_safe_or_default, try_is_present};
pub use error::{Absent, BreakCause, Broken, Fault};
pub use ext::{OptionExt, ResultExt};
pub use getter::{Getter, Required, required};

pub use arity::{fetch_chain_1, fetch_chain_2, fetch_chain_3};
pub use arity::{fetch_chain_4, fetch_chain_5, fetch_chain_6};
pub use arity::{fetch_chain_7, fetch_chain_8, fetch_chain_9};
pub use arity::{fetch_chain_or_default_1, fetch_chain_or_default_2, fetch_chain_or_default_3};
pub use arity::{fetch_chain_or_default_4, fetch_chain_or_default_5, fetch_chain_or_default_6};
pub use arity::{fetch_chain_or_default_7, fetch_chain_or_default_8, fetch_chain_or_default_9};
pub use arity::{is_chain_present_1, is_chain_present_2, is_chain_present_3};
pub use arity::{is_chain_present_4, is_chain_present_5, is_chain_present_6};
pub use arity::{is_chain_present_7, is_chain_present_8, is_chain_present_9};
