use std::fmt::{self, Debug, Display, Formatter};

use derive_more::IsVariant;

/// The result of a computation that can fail: either a success value of type `T` or an error of
/// type `E`.
///
/// The status of an Outcome is decided once, when it is created, and never changes afterwards.
/// There are no in-place mutators, every combinator produces a new Outcome.
///
/// `Outcome<Optional<T>, E>` is the shape produced by the wrappers in [`wrap`](crate::wrap) and
/// has dedicated support in [`dispatch`](crate::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

/// Creates a successful Outcome.
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates a failed Outcome.
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Returns true if the Outcome is `Ok` and the value satisfies the predicate.
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => false,
        }
    }

    /// Returns true if the Outcome is `Err` and the error satisfies the predicate.
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => f(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts the Outcome into a [`Result`], for use with `?`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with the held error if the Outcome is `Err`.
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic!("Attempted to unwrap an Err Outcome: {:?}", error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with `reason` and the held error if the Outcome is `Err`.
    pub fn expect(self, reason: &str) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic!("{}: {:?}", reason, error),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics with the held value if the Outcome is `Ok`.
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => panic!("Attempted to unwrap_err an Ok Outcome: {:?}", value),
            Outcome::Err(error) => error,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics with `reason` and the held value if the Outcome is `Ok`.
    pub fn expect_err(self, reason: &str) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => panic!("{}: {:?}", reason, value),
            Outcome::Err(error) => error,
        }
    }

    /// Returns the success value or the provided `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => fallback,
        }
    }

    /// Returns the success value or computes one from the error with `f`.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => T::default(),
        }
    }

    /// Maps the success value with `f`. The error is passed through untouched and `f` is never
    /// called for `Err`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error with `f`, passing success values through.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Returns `f` applied to the success value, or `fallback` for `Err`.
    pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => fallback,
        }
    }

    /// Returns `ok_fn` applied to the success value, or `err_fn` applied to the error.
    pub fn map_or_else<U>(self, err_fn: impl FnOnce(E) -> U, ok_fn: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Err(error) => err_fn(error),
        }
    }

    /// Calls `f` with a reference to the success value, if any.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Outcome<T, E> {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, if any.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Outcome<T, E> {
        if let Outcome::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Returns `other` if this Outcome is `Ok`, otherwise this Outcome's error.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains another fallible computation onto the success value. `f` is never called for `Err`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns this Outcome if it is `Ok`, otherwise `other`.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    /// Recovers from an error with `f`. `f` is never called for `Ok`.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => f(error),
        }
    }

    /// Compares two Outcomes, using `ok_cmp` for a pair of success values and `err_cmp` for a pair
    /// of errors.
    ///
    /// Outcomes with different statuses are never equal and neither comparator is called for
    /// them: a success value and an error have unrelated types, so there is no comparator that
    /// could accept the pair.
    pub fn equal_by<U, F>(
        &self,
        other: &Outcome<U, F>,
        ok_cmp: impl FnOnce(&T, &U) -> bool,
        err_cmp: impl FnOnce(&E, &F) -> bool,
    ) -> bool {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => ok_cmp(a, b),
            (Outcome::Err(a), Outcome::Err(b)) => err_cmp(a, b),
            _ => false,
        }
    }

    /// Compares two Outcomes with the [`PartialEq`] implementations of `T` and `E`.
    pub fn equal(&self, other: &Outcome<T, E>) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        self.equal_by(other, T::eq, E::eq)
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Outcome::Ok(inner) => inner,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

impl<A, E, C: FromIterator<A>> FromIterator<Outcome<A, E>> for Outcome<C, E> {
    /// Collects the success values of every Outcome, stopping at the first error.
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({})", value),
            Outcome::Err(error) => write!(f, "Err({})", error),
        }
    }
}
