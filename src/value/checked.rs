use std::fmt::{self, Display, Formatter};
use std::vec;

use derive_more::From;

use super::Value;
use crate::error::{ContainerError, UndefinedBehavior};
use crate::{Nullable, Optional, Outcome};

/// Runtime-checked combinators for Optionals of dynamic values.
///
/// Where the statically typed combinators rely on the compiler to guarantee that a callback
/// returns the right shape, these inspect the returned [`Value`] and fail with
/// [`UndefinedBehavior`] when it doesn't fit. Every value stored by these methods goes through the
/// empty-sentinel collapse.
impl Optional<Value> {
    /// Like [`and`](Optional::and), but `other` must be a `Value::Optional`. It is only checked
    /// when this Optional is `Some`.
    pub fn checked_and(self, other: Value) -> Result<Optional<Value>, UndefinedBehavior> {
        match self {
            Optional::Some(_) => other.expect_optional("and"),
            Optional::None => Ok(Optional::None),
        }
    }

    /// Like [`and_then`](Optional::and_then), but `f` must return a `Value::Optional`.
    pub fn checked_and_then(
        self,
        f: impl FnOnce(Value) -> Value,
    ) -> Result<Optional<Value>, UndefinedBehavior> {
        match self {
            Optional::Some(value) => f(value).expect_optional("and_then"),
            Optional::None => Ok(Optional::None),
        }
    }

    /// Like [`or`](Optional::or), but `other` must be a `Value::Optional`. It is only checked
    /// when this Optional is `None`.
    pub fn checked_or(self, other: Value) -> Result<Optional<Value>, UndefinedBehavior> {
        match self {
            Optional::Some(_) => Ok(self),
            Optional::None => other.expect_optional("or"),
        }
    }

    /// Like [`or_else`](Optional::or_else), but `f` must return a `Value::Optional`.
    pub fn checked_or_else(
        self,
        f: impl FnOnce() -> Value,
    ) -> Result<Optional<Value>, UndefinedBehavior> {
        match self {
            Optional::Some(_) => Ok(self),
            Optional::None => f().expect_optional("or_else"),
        }
    }

    /// Like [`xor`](Optional::xor), but `other` must be a `Value::Optional`.
    pub fn checked_xor(self, other: Value) -> Result<Optional<Value>, UndefinedBehavior> {
        Ok(self.xor(other.expect_optional("xor")?))
    }

    /// Like [`filter`](Optional::filter), but `predicate` must return a `Value::Bool`.
    pub fn checked_filter(
        self,
        predicate: impl FnOnce(&Value) -> Value,
    ) -> Result<Optional<Value>, UndefinedBehavior> {
        let Optional::Some(value) = self else {
            return Ok(Optional::None);
        };

        match predicate(&value) {
            Value::Bool(true) => Ok(Optional::Some(value)),
            Value::Bool(false) => Ok(Optional::None),
            other => Err(UndefinedBehavior::new(format!(
                "filter predicate must return a bool, got {}",
                other.kind()
            ))),
        }
    }

    /// Like [`zip`](Optional::zip), with the pair stored as a two-item `Value::List`. `other` must
    /// be a `Value::Optional`.
    pub fn checked_zip(self, other: Value) -> Result<Optional<Value>, UndefinedBehavior> {
        Ok(self.zip_with(other.expect_optional("zip")?, |a, b| Value::List(vec![a, b])))
    }

    /// Splits a two-item `Value::List` into a pair of Optionals. Any other held value, or `None`,
    /// produces `(None, None)`.
    pub fn unzip_value(self) -> (Optional<Value>, Optional<Value>) {
        match self {
            Optional::Some(Value::List(items)) if items.len() == 2 => {
                let mut items = items.into_iter();
                (
                    items.next().map_or(Optional::None, Value::into_optional),
                    items.next().map_or(Optional::None, Value::into_optional),
                )
            },
            _ => (Optional::None, Optional::None),
        }
    }

    /// Removes one level of nesting if the held value is a `Value::Optional`. Other held values
    /// are left as they are.
    pub fn flatten_value(self) -> Optional<Value> {
        match self {
            Optional::Some(Value::Optional(inner)) => *inner,
            other => other,
        }
    }

    /// Like [`transpose`](Optional::transpose), but the held value must be a `Value::Outcome`.
    /// The Optional side of the result is stored as a `Value::Optional`.
    pub fn checked_transpose(self) -> Result<Outcome<Value, Value>, UndefinedBehavior> {
        match self {
            Optional::None => Ok(Outcome::Ok(Value::from(Optional::None))),
            Optional::Some(value) => Ok(value
                .expect_outcome("transpose")?
                .map(|value| Value::from(Optional::Some(value)))),
        }
    }

    /// Iterates the held value.
    ///
    /// # Errors
    /// - [`EmptyOptional`](crate::error::EmptyOptional) if the Optional is `None`.
    /// - [`UndefinedBehavior`] if the held value isn't iterable.
    pub fn checked_iter(self) -> Result<vec::IntoIter<Value>, ContainerError> {
        Ok(self.try_unwrap()?.try_iter()?)
    }

    /// Compares against any value: held values of another `Value::Optional` are compared with
    /// `cmp`, anything else is compared against this whole Optional.
    pub fn equal_value_by(&self, other: &Value, cmp: impl Fn(&Value, &Value) -> bool) -> bool {
        match other {
            Value::Optional(other) => self.equal_by(&**other, cmp),
            other => cmp(&Value::from(self.clone()), other),
        }
    }

    /// [`equal_value_by`](Optional::equal_value_by) with structural equality.
    pub fn equal_value(&self, other: &Value) -> bool {
        self.equal_value_by(other, Value::eq)
    }
}

/// The ways iterating an `Outcome<Value, Value>` can fail.
#[derive(Debug, Clone, PartialEq, From)]
pub enum IterError {
    /// The success value isn't iterable.
    Contract(UndefinedBehavior),
    /// The Outcome failed, this is its error.
    Raised(Value),
}

impl Display for IterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IterError::Contract(error) => write!(f, "{}", error),
            IterError::Raised(error) => write!(f, "Iterated a failed Outcome: {}", error),
        }
    }
}

impl std::error::Error for IterError {}

/// Runtime-checked combinators for Outcomes of dynamic values. See the equivalent block on
/// `Optional<Value>`.
impl Outcome<Value, Value> {
    /// Like [`and`](Outcome::and), but `other` must be a `Value::Outcome`. It is only checked when
    /// this Outcome is `Ok`.
    pub fn checked_and(self, other: Value) -> Result<Outcome<Value, Value>, UndefinedBehavior> {
        match self {
            Outcome::Ok(_) => other.expect_outcome("and"),
            Outcome::Err(_) => Ok(self),
        }
    }

    /// Like [`and_then`](Outcome::and_then), but `f` must return a `Value::Outcome`.
    pub fn checked_and_then(
        self,
        f: impl FnOnce(Value) -> Value,
    ) -> Result<Outcome<Value, Value>, UndefinedBehavior> {
        match self {
            Outcome::Ok(value) => f(value).expect_outcome("and_then"),
            Outcome::Err(_) => Ok(self),
        }
    }

    /// Like [`or`](Outcome::or), but `other` must be a `Value::Outcome`. It is only checked when
    /// this Outcome is `Err`.
    pub fn checked_or(self, other: Value) -> Result<Outcome<Value, Value>, UndefinedBehavior> {
        match self {
            Outcome::Ok(_) => Ok(self),
            Outcome::Err(_) => other.expect_outcome("or"),
        }
    }

    /// Like [`or_else`](Outcome::or_else), but `f` must return a `Value::Outcome`.
    pub fn checked_or_else(
        self,
        f: impl FnOnce(Value) -> Value,
    ) -> Result<Outcome<Value, Value>, UndefinedBehavior> {
        match self {
            Outcome::Ok(_) => Ok(self),
            Outcome::Err(error) => f(error).expect_outcome("or_else"),
        }
    }

    /// Removes one level of nesting if the success value is a `Value::Outcome`.
    pub fn flatten_value(self) -> Outcome<Value, Value> {
        match self {
            Outcome::Ok(Value::Outcome(inner)) => *inner,
            other => other,
        }
    }

    /// Iterates the success value. A failed Outcome propagates its error as
    /// [`IterError::Raised`].
    pub fn checked_iter(self) -> Result<vec::IntoIter<Value>, IterError> {
        match self {
            Outcome::Ok(value) => Ok(value.try_iter()?),
            Outcome::Err(error) => Err(IterError::Raised(error)),
        }
    }

    /// Compares against any value: payloads of another `Value::Outcome` with the same status are
    /// compared with `cmp`, anything else is compared against this whole Outcome.
    pub fn equal_value_by(&self, other: &Value, cmp: impl Fn(&Value, &Value) -> bool) -> bool {
        match other {
            Value::Outcome(other) => self.equal_by(&**other, &cmp, &cmp),
            other => cmp(&Value::from(self.clone()), other),
        }
    }

    /// [`equal_value_by`](Outcome::equal_value_by) with structural equality.
    pub fn equal_value(&self, other: &Value) -> bool {
        self.equal_value_by(other, Value::eq)
    }
}
