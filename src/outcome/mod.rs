//! A module containing [`Outcome`], the fallible-computation container.
//!
//! [`Outcome`] is also re-exported at the crate root.

mod iter;
mod outcome;
mod tests;

pub use outcome::*;
