//! A module containing [`Optional`] and associated types.
//!
//! [`Nullable`] describes values that carry their own empty sentinel, such as
//! [`Option`](std::option::Option), and controls when an Optional collapses to `None`.
//!
//! [`Optional`] is also re-exported at the crate root.

mod iter;
mod nullable;
mod optional;
mod tests;

pub use nullable::*;
pub use optional::*;
