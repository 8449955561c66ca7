//! `podtools` is a small toolkit for working with the output of Proper
//! Orthogonal Decomposition (POD) runs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use podtools_modes as modes;

#[doc(inline)]
pub use podtools_utils as utils;
