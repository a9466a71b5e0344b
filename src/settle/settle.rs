use std::future::Future;
use std::pin::Pin;

use log::debug;

use super::Resolver;
use crate::error::{AsyncNotAllowed, ContainerError, UndefinedBehavior};
use crate::{Nullable, Optional, Outcome};

/// The value returned by an executor, describing what (if anything) it contributes to the
/// container under construction.
///
/// Containers returned from an executor are adopted through the resolver, so a settlement the
/// executor already made takes priority over them.
///
/// | Return type | Effect |
/// |-|-|
/// | `()` | Nothing, the executor settles through the resolver alone. |
/// | `Outcome<T, E>` | `Ok` resolves, `Err` rejects. |
/// | `Optional<T>` | `Some` resolves, `None` rejects with `E::default()`. |
/// | `Result<R, E>` | `Err` rejects, `Ok` settles the inner `R`. This is how executors fail with `?`. |
/// | `Pin<Box<dyn Future>>` | Construction fails with [`AsyncNotAllowed`]. |
pub trait Settle<T, E> {
    /// Applies this executor return value to the `resolver`.
    fn settle(self, resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed>;
}

impl<T, E> Settle<T, E> for () {
    fn settle(self, _resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed> {
        Ok(())
    }
}

impl<T, E> Settle<T, E> for Outcome<T, E> {
    fn settle(self, resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed> {
        resolver.settle(self);
        Ok(())
    }
}

impl<T, E: Default> Settle<T, E> for Optional<T> {
    fn settle(self, resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed> {
        match self {
            Optional::Some(value) => resolver.resolve(value),
            Optional::None => resolver.reject(E::default()),
        };
        Ok(())
    }
}

impl<T, E, R: Settle<T, E>> Settle<T, E> for Result<R, E> {
    fn settle(self, resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed> {
        match self {
            Ok(inner) => inner.settle(resolver),
            Err(error) => {
                resolver.reject(error);
                Ok(())
            },
        }
    }
}

impl<'a, T, E, O> Settle<T, E> for Pin<Box<dyn Future<Output = O> + 'a>> {
    fn settle(self, _resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed> {
        debug!("Executor returned a future, refusing to construct container");
        Err(AsyncNotAllowed)
    }
}

impl<'a, T, E, O> Settle<T, E> for Pin<Box<dyn Future<Output = O> + Send + 'a>> {
    fn settle(self, _resolver: &Resolver<T, E>) -> Result<(), AsyncNotAllowed> {
        debug!("Executor returned a future, refusing to construct container");
        Err(AsyncNotAllowed)
    }
}

impl<T, E> Outcome<T, E> {
    /// Constructs an Outcome by running `executor` with a fresh [`Resolver`].
    ///
    /// The executor runs synchronously and exactly once. The first settlement wins, whether it is
    /// made through the resolver or by the executor's return value (see [`Settle`]).
    ///
    /// # Errors
    /// - [`AsyncNotAllowed`] if the executor returns a future.
    /// - [`UndefinedBehavior`] if the executor finishes without settling the Outcome.
    pub fn from_executor<F, R>(executor: F) -> Result<Outcome<T, E>, ContainerError>
    where
        F: FnOnce(&Resolver<T, E>) -> R,
        R: Settle<T, E>,
    {
        let resolver = Resolver::new();
        executor(&resolver).settle(&resolver)?;

        match resolver.into_inner() {
            Some(outcome) => Ok(outcome),
            None => {
                debug!("Executor returned without settling its Outcome");
                Err(UndefinedBehavior::new("executor never resolved or rejected").into())
            },
        }
    }
}

impl<T> Optional<T> {
    /// Constructs an Optional by running `executor` with a fresh [`Resolver`].
    ///
    /// The executor runs synchronously and exactly once. The first of
    /// [`some`](Resolver::some)/[`none`](Resolver::none) wins, and an executor that settles
    /// nothing produces `None`. Returned containers are adopted, see [`Settle`]. Settled values
    /// are stored as given, use [`from_nullable_executor`](Optional::from_nullable_executor) when
    /// they may be an empty sentinel.
    ///
    /// # Errors
    /// [`AsyncNotAllowed`] if the executor returns a future.
    pub fn from_executor<F, R>(executor: F) -> Result<Optional<T>, AsyncNotAllowed>
    where
        F: FnOnce(&Resolver<T, ()>) -> R,
        R: Settle<T, ()>,
    {
        let resolver = Resolver::new();
        executor(&resolver).settle(&resolver)?;

        Ok(match resolver.into_inner() {
            Some(Outcome::Ok(value)) => Optional::Some(value),
            Some(Outcome::Err(())) | None => Optional::None,
        })
    }

    /// Like [`from_executor`](Optional::from_executor), but the executor settles with a
    /// [`Nullable`] value whose empty sentinel collapses to `None`.
    ///
    /// # Errors
    /// [`AsyncNotAllowed`] if the executor returns a future.
    pub fn from_nullable_executor<N, F, R>(executor: F) -> Result<Optional<T>, AsyncNotAllowed>
    where
        N: Nullable<Inner = T>,
        F: FnOnce(&Resolver<N, ()>) -> R,
        R: Settle<N, ()>,
    {
        Ok(Optional::from_executor(executor)?.and_then(N::into_optional))
    }
}
