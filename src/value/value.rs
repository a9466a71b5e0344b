use std::fmt::{self, Display, Formatter};
use std::vec;

use derive_more::IsVariant;

use crate::error::{AsyncNotAllowed, UndefinedBehavior};
use crate::settle::{Resolver, Settle};
use crate::{Nullable, Optional, Outcome};

/// A dynamically typed value, for hosts that only learn the shape of their data at runtime.
///
/// `Undefined` and `Null` are both the empty sentinel: they collapse to
/// [`Optional::None`] whenever they pass through a nullable entry point.
#[derive(Debug, Clone, Default, PartialEq, IsVariant)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Optional(Box<Optional<Value>>),
    Outcome(Box<Outcome<Value, Value>>),
}

impl Value {
    /// Returns the name of this value's variant, for error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Optional(_) => "optional",
            Value::Outcome(_) => "outcome",
        }
    }

    /// Returns an iterator over the items of a list, or the characters of a string.
    ///
    /// # Errors
    /// Fails with [`UndefinedBehavior`] for any value that isn't iterable.
    pub fn try_iter(self) -> Result<vec::IntoIter<Value>, UndefinedBehavior> {
        match self {
            Value::List(items) => Ok(items.into_iter()),
            Value::Str(text) => Ok(text
                .chars()
                .map(|c| Value::Str(c.to_string()))
                .collect::<Vec<_>>()
                .into_iter()),
            other => Err(UndefinedBehavior::new(format!(
                "a value of kind {} is not iterable",
                other.kind()
            ))),
        }
    }

    /// Unwraps a `Value::Optional`, failing if this value is anything else.
    pub(crate) fn expect_optional(self, operation: &str) -> Result<Optional<Value>, UndefinedBehavior> {
        match self {
            Value::Optional(optional) => Ok(*optional),
            other => Err(UndefinedBehavior::new(format!(
                "{} requires an optional, got {}",
                operation,
                other.kind()
            ))),
        }
    }

    /// Unwraps a `Value::Outcome`, failing if this value is anything else.
    pub(crate) fn expect_outcome(
        self,
        operation: &str,
    ) -> Result<Outcome<Value, Value>, UndefinedBehavior> {
        match self {
            Value::Outcome(outcome) => Ok(*outcome),
            other => Err(UndefinedBehavior::new(format!(
                "{} requires an outcome, got {}",
                operation,
                other.kind()
            ))),
        }
    }
}

impl Nullable for Value {
    type Inner = Value;

    fn is_sentinel(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    fn into_optional(self) -> Optional<Value> {
        if self.is_sentinel() {
            Optional::None
        } else {
            Optional::Some(self)
        }
    }
}

impl Settle<Value, Value> for Value {
    /// Containers are adopted, `Optional(None)` rejecting with `Undefined`. Any other value is
    /// ignored, leaving the executor's own settlement (if any) in place.
    fn settle(self, resolver: &Resolver<Value, Value>) -> Result<(), AsyncNotAllowed> {
        match self {
            Value::Optional(optional) => (*optional).settle(resolver),
            Value::Outcome(outcome) => (*outcome).settle(resolver),
            _ => Ok(()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Optional<Value>> for Value {
    fn from(value: Optional<Value>) -> Self {
        Value::Optional(Box::new(value))
    }
}

impl From<Outcome<Value, Value>> for Value {
    fn from(value: Outcome<Value, Value>) -> Self {
        Value::Outcome(Box::new(value))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "{}", value),
            Value::List(items) => f.debug_list().entries(items.iter().map(DisplayAsDebug)).finish(),
            Value::Optional(optional) => write!(f, "{}", optional),
            Value::Outcome(outcome) => write!(f, "{}", outcome),
        }
    }
}

struct DisplayAsDebug<'a>(&'a Value);

impl fmt::Debug for DisplayAsDebug<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
