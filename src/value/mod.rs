//! Dynamically typed values and runtime-checked container operations.
//!
//! The statically typed API of [`Optional`](crate::Optional) and [`Outcome`](crate::Outcome)
//! leaves most contract violations to the compiler: a filter predicate can only return a bool and
//! `and_then` can only return an Optional. Hosts that deal with data of unknown shape can instead
//! store [`Value`]s and use the `checked_*` methods, which perform the same checks at runtime and
//! fail with [`UndefinedBehavior`](crate::error::UndefinedBehavior).
//!
//! [`Value::Undefined`] and [`Value::Null`] are both treated as the empty sentinel. They only
//! collapse to `None` when they pass through one of the nullable entry points, so values of
//! unknown shape should be stored with:
//! - [`Optional::from_nullable`](crate::Optional::from_nullable),
//!   [`map_nullable`](crate::Optional::map_nullable),
//!   [`insert_nullable`](crate::Optional::insert_nullable) and
//!   [`replace_nullable`](crate::Optional::replace_nullable),
//! - [`Optional::from_nullable_executor`](crate::Optional::from_nullable_executor),
//! - [`bind_nullable`](crate::wrap::bind_nullable) and
//!   [`wrap_nullable`](crate::wrap::wrap_nullable).

mod checked;
mod value;

pub use checked::*;
pub use value::*;
