//! Conversions between [`Optional`] and [`Outcome`], and from/to the standard library's
//! [`Option`] and [`Result`].

use crate::{Nullable, Optional, Outcome};

impl<T> Optional<T> {
    /// Converts into an Outcome, using `error` when the Optional is empty.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Optional::Some(value) => Outcome::Ok(value),
            Optional::None => Outcome::Err(error),
        }
    }

    /// Converts into an Outcome, computing the error with `f` when the Optional is empty. `f` is
    /// never called for `Some`.
    pub fn ok_or_else<E>(self, f: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Optional::Some(value) => Outcome::Ok(value),
            Optional::None => Outcome::Err(f()),
        }
    }

    /// Converts into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swaps an Optional of an Outcome into an Outcome of an Optional.
    ///
    /// - `None` becomes `Ok(None)`.
    /// - `Some(Ok(v))` becomes `Ok(Some(v))`.
    /// - `Some(Err(e))` becomes `Err(e)`.
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        match self {
            Optional::Some(Outcome::Ok(value)) => Outcome::Ok(Optional::Some(value)),
            Optional::Some(Outcome::Err(error)) => Outcome::Err(error),
            Optional::None => Outcome::Ok(Optional::None),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into an Optional of the success value, discarding any error.
    pub fn ok(self) -> Optional<T> {
        match self {
            Outcome::Ok(value) => Optional::Some(value),
            Outcome::Err(_) => Optional::None,
        }
    }

    /// Converts into an Optional of the error, discarding any success value.
    pub fn err(self) -> Optional<E> {
        match self {
            Outcome::Ok(_) => Optional::None,
            Outcome::Err(error) => Optional::Some(error),
        }
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swaps an Outcome of an Optional into an Optional of an Outcome. This is the inverse of
    /// [`Optional::transpose`].
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        match self {
            Outcome::Ok(Optional::Some(value)) => Optional::Some(Outcome::Ok(value)),
            Outcome::Ok(Optional::None) => Optional::None,
            Outcome::Err(error) => Optional::Some(Outcome::Err(error)),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.into_optional()
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_result()
    }
}
