use std::fmt::{self, Display, Formatter};
use std::mem;

use derive_more::IsVariant;

use super::Nullable;
use crate::error::{EmptyOptional, UndefinedBehavior};
use crate::util::option::OptionalExtension;
use crate::util::result::ResultExtension;

/// A container holding zero or one value of type `T`.
///
/// Optional is always in exactly one state, [`Some`](Optional::Some) or
/// [`None`](Optional::None). Values that carry their own notion of absence (see [`Nullable`])
/// collapse to `None` whenever they pass through a nullable entry point such as
/// [`from_nullable`](Optional::from_nullable), [`map_nullable`](Optional::map_nullable),
/// [`insert_nullable`](Optional::insert_nullable) or [`replace_nullable`](Optional::replace_nullable).
/// The plain entry points (`Some(..)`, [`map`](Optional::map), [`insert`](Optional::insert),
/// [`replace`](Optional::replace)) store whatever they are given.
///
/// Nearly every combinator consumes the Optional and produces a new one. The exceptions are
/// [`insert`](Optional::insert), [`replace`](Optional::replace), [`take`](Optional::take),
/// [`get_or_insert`](Optional::get_or_insert) and [`get_or_insert_with`](Optional::get_or_insert_with),
/// which mutate the receiver in place. Anyone holding the same Optional through a `&mut` will
/// observe these changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Optional<T> {
    None,
    Some(T),
}

/// Creates an Optional holding `value`.
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates an empty Optional.
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    /// Creates an Optional from a [`Nullable`] value, collapsing the empty sentinel to `None`.
    pub fn from_nullable<N: Nullable<Inner = T>>(value: N) -> Optional<T> {
        value.into_optional()
    }

    /// Returns true if the Optional holds a value that satisfies the provided predicate.
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => false,
        }
    }

    /// Returns true if the Optional is empty or holds a value that satisfies the predicate.
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => true,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Returns the held value, or an [`EmptyOptional`] error if there is none.
    pub fn try_unwrap(self) -> Result<T, EmptyOptional> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(EmptyOptional::default()),
        }
    }

    /// Returns the held value, or an [`EmptyOptional`] error carrying `reason` if there is none.
    pub fn try_expect(self, reason: &str) -> Result<T, EmptyOptional> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(EmptyOptional::with_reason(reason)),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with [`EmptyOptional`] if the Optional is `None`.
    pub fn unwrap(self) -> T {
        self.try_unwrap().throw()
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with [`EmptyOptional`] carrying the provided `reason` if the Optional is `None`.
    pub fn expect(self, reason: &str) -> T {
        self.try_expect(reason).throw()
    }

    /// Returns the held value or the provided `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => fallback,
        }
    }

    /// Returns the held value or computes one from `f`. `f` is only called when the Optional is
    /// empty.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => f(),
        }
    }

    /// Returns the held value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Maps the held value with `f`, leaving `None` untouched without calling `f`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Maps the held value with `f`, collapsing a result that is the empty sentinel to `None`.
    pub fn map_nullable<N: Nullable>(self, f: impl FnOnce(T) -> N) -> Optional<N::Inner> {
        match self {
            Optional::Some(value) => f(value).into_optional(),
            Optional::None => Optional::None,
        }
    }

    /// Returns `f` applied to the held value, or `fallback` if there is none.
    pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => fallback,
        }
    }

    /// Returns `some_fn` applied to the held value, or the result of `none_fn` if there is none.
    pub fn map_or_else<U>(self, none_fn: impl FnOnce() -> U, some_fn: impl FnOnce(T) -> U) -> U {
        match self {
            Optional::Some(value) => some_fn(value),
            Optional::None => none_fn(),
        }
    }

    /// Calls `f` with a reference to the held value, if any, and returns the Optional unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Optional<T> {
        if let Optional::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Returns `other` if this Optional is `Some`, otherwise `None`.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(_) => other,
            Optional::None => Optional::None,
        }
    }

    /// Chains another Optional-producing computation onto the held value. `f` is never called for
    /// `None`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Returns this Optional if it is `Some`, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => other,
        }
    }

    /// Returns this Optional if it is `Some`, otherwise the result of `f`. `f` is only called for
    /// `None`.
    pub fn or_else(self, f: impl FnOnce() -> Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => f(),
        }
    }

    /// Returns whichever Optional is `Some`, if exactly one of them is.
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (Optional::Some(value), Optional::None) | (Optional::None, Optional::Some(value)) => {
                Optional::Some(value)
            },
            _ => Optional::None,
        }
    }

    /// Keeps the held value only if it satisfies `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Optional<T> {
        if let Optional::Some(value) = self {
            if predicate(&value) {
                return Optional::Some(value);
            }
        }
        Optional::None
    }

    /// Pairs the held values of two Optionals, if both are `Some`.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines the held values of two Optionals with `f`, if both are `Some`.
    pub fn zip_with<U, R>(self, other: Optional<U>, f: impl FnOnce(T, U) -> R) -> Optional<R> {
        match (self, other) {
            (Optional::Some(a), Optional::Some(b)) => Optional::Some(f(a, b)),
            _ => Optional::None,
        }
    }

    /// Stores `value` in the Optional, dropping any previous value, and returns a mutable
    /// reference to it.
    ///
    /// This mutates the receiver in place.
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Optional::Some(value);

        // SAFETY: The Optional was just set to Some.
        unsafe { self.as_mut().unreachable() }
    }

    /// Stores a [`Nullable`] value in the Optional, collapsing the empty sentinel to `None`, and
    /// returns the receiver.
    ///
    /// This mutates the receiver in place.
    pub fn insert_nullable<N: Nullable<Inner = T>>(&mut self, value: N) -> &mut Optional<T> {
        *self = value.into_optional();
        self
    }

    /// Stores `value` in the Optional, returning the previous contents.
    ///
    /// This mutates the receiver in place.
    pub const fn replace(&mut self, value: T) -> Optional<T> {
        mem::replace(self, Optional::Some(value))
    }

    /// Stores a [`Nullable`] value in the Optional, collapsing the empty sentinel to `None`, and
    /// returns the previous contents.
    ///
    /// This mutates the receiver in place.
    pub fn replace_nullable<N: Nullable<Inner = T>>(&mut self, value: N) -> Optional<T> {
        mem::replace(self, value.into_optional())
    }

    /// Takes the held value out of the Optional, leaving `None` in its place.
    ///
    /// This mutates the receiver in place.
    pub const fn take(&mut self) -> Optional<T> {
        mem::replace(self, Optional::None)
    }

    /// Stores `value` if the Optional is empty, then returns a mutable reference to the held
    /// value.
    ///
    /// This mutates the receiver in place.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `f` if the Optional is empty, then returns a mutable reference to the
    /// held value. `f` is only called for `None`.
    ///
    /// This mutates the receiver in place.
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        if self.is_none() {
            *self = Optional::Some(f());
        }

        // SAFETY: A None would have been replaced by Some above.
        unsafe { self.as_mut().unreachable() }
    }

    /// Compares the held values of two Optionals with `cmp`. Two empty Optionals are equal, while
    /// an empty and a full Optional never are.
    pub fn equal_by<U>(&self, other: &Optional<U>, cmp: impl FnOnce(&T, &U) -> bool) -> bool {
        match (self, other) {
            (Optional::Some(a), Optional::Some(b)) => cmp(a, b),
            (Optional::None, Optional::None) => true,
            _ => false,
        }
    }

    /// Compares two Optionals with `T`'s [`PartialEq`] implementation.
    pub fn equal(&self, other: &Optional<T>) -> bool
    where
        T: PartialEq,
    {
        self.equal_by(other, T::eq)
    }
}

impl<T: Nullable> Optional<T> {
    /// Like [`get_or_insert`](Optional::get_or_insert), but refuses the empty sentinel as an
    /// argument, whether or not the Optional already holds a value.
    ///
    /// This mutates the receiver in place.
    pub fn checked_get_or_insert(&mut self, value: T) -> Result<&mut T, UndefinedBehavior> {
        if value.is_sentinel() {
            return Err(empty_insert());
        }
        self.checked_get_or_insert_with(|| value)
    }

    /// Like [`get_or_insert_with`](Optional::get_or_insert_with), but fails if `f` produces the
    /// empty sentinel. The receiver is left untouched in that case.
    ///
    /// This mutates the receiver in place.
    pub fn checked_get_or_insert_with(
        &mut self,
        f: impl FnOnce() -> T,
    ) -> Result<&mut T, UndefinedBehavior> {
        if self.is_none() {
            let value = f();
            if value.is_sentinel() {
                return Err(empty_insert());
            }
            *self = Optional::Some(value);
        }

        // SAFETY: A None would have been replaced by Some above, or returned early.
        Ok(unsafe { self.as_mut().unreachable() })
    }
}

fn empty_insert() -> UndefinedBehavior {
    UndefinedBehavior::new("get_or_insert called with an empty value")
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Optional<T> {
        match self {
            Optional::Some(inner) => inner,
            Optional::None => Optional::None,
        }
    }
}

impl<A, B> Optional<(A, B)> {
    /// Splits an Optional pair into a pair of Optionals.
    pub fn unzip(self) -> (Optional<A>, Optional<B>) {
        match self {
            Optional::Some((a, b)) => (Optional::Some(a), Optional::Some(b)),
            Optional::None => (Optional::None, Optional::None),
        }
    }
}

impl<T: Clone> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by cloning the held value.
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by copying the held value.
    pub const fn copied(self) -> Optional<T> {
        match self {
            Optional::Some(&value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(value) => write!(f, "Some({})", value),
            Optional::None => write!(f, "None()"),
        }
    }
}
