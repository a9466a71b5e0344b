//! This crate provides two algebraic containers, [`Optional`] and [`Outcome`], along with
//! conversions between them and a few helpers for composing them.
//!
//! # Purpose
//! Rust already has [`Option`] and [`Result`], so this crate isn't about filling a gap in the
//! language. It implements the same ideas again with a couple of twists that come up when
//! embedding fallible computations in a host that doesn't share Rust's type system:
//! - An explicit notion of an *empty sentinel* ([`Nullable`]), which collapses to
//!   [`Optional::None`] whenever it passes through a nullable entry point.
//! - One-shot *executor* construction ([`settle`]), where a closure decides the final state of a
//!   container through a single-assignment [`Resolver`](settle::Resolver).
//! - Uniform dispatch ([`dispatch`]) over booleans and either container, including the nested
//!   `Outcome<Optional<T>, E>` shape.
//! - Function and future wrappers ([`wrap`]) that turn every call into an
//!   `Outcome<Optional<T>, E>`, so that nothing needs to be checked before use.
//! - A dynamically typed [`Value`](value::Value) with runtime-checked versions of the combinators.
//!
//! # Error Handling
//! Contract violations are reported through the types in [`error`], which implement
//! [`Error`](std::error::Error) and are gathered into [`ContainerError`](error::ContainerError) for
//! static dispatch. As with the standard library, `unwrap` and `expect` panic, and each has a
//! `try_` counterpart where a panic would be unhelpful. The crate never retries or swallows an
//! error, recovering is left to `unwrap_or`, `or_else` and `map_err`.
//!
//! # Features
//! - `serde`: `Serialize` and `Deserialize` for both containers.
//! - `futures`: [`bind_async`](wrap::bind_async), [`wrap_async`](wrap::wrap_async) and stream
//!   iteration.
//! - `value`: the dynamically typed [`value`] module.
//!
//! All of them are enabled by default.
//!
//! # Logging
//! The crate logs through the [`log`] facade and never installs a logger itself. Nothing is
//! logged above `debug`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

mod convert;
pub mod dispatch;
pub mod error;
pub mod optional;
pub mod outcome;
#[cfg(feature = "serde")]
mod serialize;
pub mod settle;
#[cfg(feature = "value")]
pub mod value;
pub mod wrap;

pub(crate) mod util;

pub use dispatch::{Dispatch, dispatch};
pub use optional::{Nullable, Optional, none, some};
pub use outcome::{Outcome, err, ok};
pub use wrap::{bind, bind_nullable, wrap};
