//! Uniform two-way dispatch over booleans, [`Optional`]s and [`Outcome`]s.
//!
//! [`dispatch`] invokes exactly one of two callbacks depending on the state of its argument. The
//! nested shape `Outcome<Optional<T>, E>` produced by [`wrap`](crate::wrap) has its own entry point,
//! [`Outcome::dispatch_nested`], which treats `Ok(None)` as a failure.
//!
//! With the `value` feature, [`dispatch_value`] performs the same dispatch on a dynamically typed
//! [`Value`], rejecting anything that isn't a boolean or a container.

#[cfg(feature = "value")]
use crate::error::UndefinedBehavior;
#[cfg(feature = "value")]
use crate::value::Value;
use crate::{Optional, Outcome};

/// A type with a success state and a failure state.
pub trait Dispatch: Sized {
    /// The value passed to the success callback.
    type Success;
    /// The value passed to the failure callback.
    type Failure;

    /// Calls `on_success` or `on_failure` depending on the state of `self`. Exactly one of the
    /// two is called, exactly once.
    fn dispatch<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(Self::Success) -> R,
        F: FnOnce(Self::Failure) -> R;
}

impl Dispatch for bool {
    type Success = bool;
    type Failure = bool;

    fn dispatch<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(bool) -> R,
        F: FnOnce(bool) -> R,
    {
        if self {
            on_success(true)
        } else {
            on_failure(false)
        }
    }
}

impl<T> Dispatch for Optional<T> {
    type Success = T;
    type Failure = ();

    fn dispatch<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(()) -> R,
    {
        match self {
            Optional::Some(value) => on_success(value),
            Optional::None => on_failure(()),
        }
    }
}

impl<T, E> Dispatch for Outcome<T, E> {
    type Success = T;
    type Failure = E;

    fn dispatch<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => on_success(value),
            Outcome::Err(error) => on_failure(error),
        }
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Dispatches on an Outcome holding an Optional, collapsing the extra level of nesting.
    ///
    /// - `Ok(Some(x))` calls `on_success(x)`.
    /// - `Ok(None)` calls `on_failure(None)`, an absent value counts as a failure.
    /// - `Err(e)` calls `on_failure(Some(e))`.
    pub fn dispatch_nested<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Option<E>) -> R,
    ) -> R {
        match self {
            Outcome::Ok(Optional::Some(value)) => on_success(value),
            Outcome::Ok(Optional::None) => on_failure(None),
            Outcome::Err(error) => on_failure(Some(error)),
        }
    }
}

/// Calls `on_success` or `on_failure` depending on the state of `value`.
///
/// See [`Dispatch`] for the types accepted.
pub fn dispatch<D, R>(
    value: D,
    on_success: impl FnOnce(D::Success) -> R,
    on_failure: impl FnOnce(D::Failure) -> R,
) -> R
where
    D: Dispatch,
{
    value.dispatch(on_success, on_failure)
}

/// Dispatches on a dynamically typed [`Value`].
///
/// | Value | Callback |
/// |-|-|
/// | `Bool(true)` | `on_success(Bool(true))` |
/// | `Bool(false)` | `on_failure(Bool(false))` |
/// | `Optional(Some(x))` | `on_success(x)` |
/// | `Optional(None)` | `on_failure(Undefined)` |
/// | `Outcome(Ok(Optional(Some(x))))` | `on_success(x)` |
/// | `Outcome(Ok(Optional(None)))` | `on_failure(Undefined)` |
/// | `Outcome(Ok(x))` | `on_success(x)` |
/// | `Outcome(Err(e))` | `on_failure(e)` |
///
/// # Errors
/// Fails with [`UndefinedBehavior`] for any other value, without calling either callback.
#[cfg(feature = "value")]
pub fn dispatch_value<R>(
    value: Value,
    on_success: impl FnOnce(Value) -> R,
    on_failure: impl FnOnce(Value) -> R,
) -> Result<R, UndefinedBehavior> {
    let collapse = |optional: Optional<Value>| match optional {
        Optional::Some(inner) => Outcome::Ok(inner),
        Optional::None => Outcome::Err(Value::Undefined),
    };

    let outcome = match value {
        Value::Bool(flag) => flag.dispatch(
            |flag| Outcome::Ok(Value::Bool(flag)),
            |flag| Outcome::Err(Value::Bool(flag)),
        ),
        Value::Optional(optional) => collapse(*optional),
        Value::Outcome(outcome) => match *outcome {
            Outcome::Ok(Value::Optional(optional)) => collapse(*optional),
            other => other,
        },
        other => {
            return Err(UndefinedBehavior::new(format!(
                "cannot dispatch on a value of kind {}",
                other.kind()
            )));
        },
    };

    Ok(outcome.dispatch(on_success, on_failure))
}
