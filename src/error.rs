use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// A contract violation, such as passing a value of the wrong shape to one of the checked
/// operations in [`value`](crate::value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedBehavior {
    pub reason: Cow<'static, str>,
}

impl UndefinedBehavior {
    pub(crate) fn new(reason: impl Into<Cow<'static, str>>) -> UndefinedBehavior {
        UndefinedBehavior {
            reason: reason.into(),
        }
    }
}

impl Display for UndefinedBehavior {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Undefined behavior: {}!", self.reason)
    }
}

impl Error for UndefinedBehavior {}

/// The value was requested from an [`Optional`](crate::Optional) that holds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyOptional {
    pub reason: Option<String>,
}

impl EmptyOptional {
    pub(crate) fn with_reason(reason: impl Into<String>) -> EmptyOptional {
        EmptyOptional {
            reason: Some(reason.into()),
        }
    }
}

impl Display for EmptyOptional {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{}", reason),
            None => write!(f, "Attempted to unwrap an Optional with no value!"),
        }
    }
}

impl Error for EmptyOptional {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Executors must settle synchronously, but a future was returned!")]
pub struct AsyncNotAllowed;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum ContainerError {
    UndefinedBehavior(UndefinedBehavior),
    EmptyOptional(EmptyOptional),
    AsyncNotAllowed(AsyncNotAllowed),
}
