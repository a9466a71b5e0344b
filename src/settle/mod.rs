//! One-shot executor construction for [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome).
//!
//! An executor is a synchronous closure that receives a [`Resolver`], a single-assignment cell,
//! and decides the final state of the container. Its return value is interpreted through
//! [`Settle`].

mod resolver;
mod settle;

pub use resolver::*;
pub use settle::*;
