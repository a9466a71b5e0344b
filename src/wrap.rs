//! Wrappers that turn fallible functions and values into `Outcome<Optional<T>, E>`.
//!
//! A wrapped computation never fails in the usual sense: its failure is handed back as an `Err`
//! Outcome, and its success as `Ok(Some(v))`, or `Ok(None)` when the value is empty (see
//! [`bind_nullable`]). The asynchronous wrappers produce futures that always complete with an
//! Outcome.
//!
//! Functions taking several arguments are wrapped by taking a tuple, and functions taking no
//! arguments take `()`.

#[cfg(feature = "futures")]
use std::future::Future;

#[cfg(feature = "futures")]
use futures::FutureExt;
#[cfg(feature = "futures")]
use futures::future::Map;
use log::debug;

use crate::{Nullable, Optional, Outcome};

/// A future produced by [`wrap_async`] and [`bind_async`].
#[cfg(feature = "futures")]
pub type Wrapped<Fut, T, E> = Map<Fut, fn(Result<T, E>) -> Outcome<Optional<T>, E>>;

/// Wraps an already-produced result: `Ok(v)` becomes `Ok(Some(v))` and `Err(e)` stays `Err(e)`.
///
/// `v` is stored as given. Results that may be an empty sentinel, such as a dynamic
/// `Value::Null`, must go through [`wrap_nullable`] to collapse to `Ok(None)`.
pub fn wrap<T, E>(result: Result<T, E>) -> Outcome<Optional<T>, E> {
    match result {
        Ok(value) => Outcome::Ok(Optional::Some(value)),
        Err(error) => failed(error),
    }
}

/// Wraps an already-produced result holding a [`Nullable`], collapsing the empty sentinel to
/// `Ok(None)`.
pub fn wrap_nullable<N: Nullable, E>(result: Result<N, E>) -> Outcome<Optional<N::Inner>, E> {
    match result {
        Ok(value) => Outcome::Ok(value.into_optional()),
        Err(error) => failed(error),
    }
}

fn failed<T, E>(error: E) -> Outcome<T, E> {
    debug!("Wrapped computation failed, returning its error as an Err Outcome");
    Outcome::Err(error)
}

/// Wraps `f` so that every call returns an `Outcome<Optional<T>, E>` instead of a [`Result`].
///
/// As with [`wrap`], successful results are stored as given. Use [`bind_nullable`] for functions
/// returning a [`Nullable`], including the dynamic `Value`.
///
/// ```
/// use optres::bind;
///
/// let parse = bind(|text: &str| text.parse::<i32>());
/// assert_eq!(parse("3").unwrap().unwrap(), 3);
/// assert!(parse("three").is_err());
/// ```
pub fn bind<A, T, E>(f: impl Fn(A) -> Result<T, E>) -> impl Fn(A) -> Outcome<Optional<T>, E> {
    move |args| wrap(f(args))
}

/// Like [`bind`], but `f` returns a [`Nullable`] whose empty sentinel becomes `Ok(None)`.
pub fn bind_nullable<A, N, E>(
    f: impl Fn(A) -> Result<N, E>,
) -> impl Fn(A) -> Outcome<Optional<N::Inner>, E>
where
    N: Nullable,
{
    move |args| wrap_nullable(f(args))
}

/// Wraps an in-flight fallible future. The returned future always completes, yielding
/// `Ok(Some(v))` on success and `Err(e)` on failure.
///
/// There is no timeout or cancellation, race `future` externally before wrapping it if needed.
#[cfg(feature = "futures")]
pub fn wrap_async<Fut, T, E>(future: Fut) -> Wrapped<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    future.map(wrap as fn(Result<T, E>) -> Outcome<Optional<T>, E>)
}

/// Wraps an asynchronous function `f` so that every call returns a future that always completes
/// with an `Outcome<Optional<T>, E>`.
#[cfg(feature = "futures")]
pub fn bind_async<A, Fut, T, E>(f: impl Fn(A) -> Fut) -> impl Fn(A) -> Wrapped<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    move |args| wrap_async(f(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind() {
        let divide = bind(|(a, b): (i32, i32)| a.checked_div(b).ok_or("division by zero"));

        assert_eq!(divide((6, 3)), Outcome::Ok(Optional::Some(2)));
        assert_eq!(divide((6, 0)), Outcome::Err("division by zero"));

        let fail = bind(|()| Err::<u8, _>("boom"));
        assert_eq!(fail(()), Outcome::Err("boom"), "A failure should be returned, not raised.");
    }

    #[test]
    fn test_bind_nullable() {
        let lookup = bind_nullable(|key: &str| -> Result<Option<u8>, ()> {
            Ok(match key {
                "a" => Some(1),
                _ => None,
            })
        });

        assert_eq!(lookup("a"), Outcome::Ok(Optional::Some(1)));
        assert_eq!(
            lookup("b"),
            Outcome::Ok(Optional::None),
            "The empty sentinel should collapse to Ok(None)."
        );
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(Ok::<_, ()>(1)), Outcome::Ok(Optional::Some(1)));
        assert_eq!(wrap(Err::<u8, _>("boom")), Outcome::Err("boom"));
        assert_eq!(
            wrap_nullable(Ok::<_, ()>(Optional::<u8>::None)),
            Outcome::Ok(Optional::None)
        );
    }

    #[cfg(feature = "futures")]
    #[test]
    fn test_async() {
        use futures::executor::block_on;
        use futures::future;

        let square = bind_async(|x: i32| future::ready(Ok::<_, String>(x * x)));
        assert_eq!(block_on(square(3)), Outcome::Ok(Optional::Some(9)));

        let failing = wrap_async(future::ready(Err::<i32, _>("boom")));
        assert_eq!(block_on(failing), Outcome::Err("boom"));

        let deferred = wrap_async(async { Ok::<_, ()>("done") });
        assert_eq!(block_on(deferred), Outcome::Ok(Optional::Some("done")));
    }
}
