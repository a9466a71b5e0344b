#[cfg(feature = "futures")]
use futures::future::{self, Either};
#[cfg(feature = "futures")]
use futures::stream::{self, Stream, StreamExt};

use super::Outcome;

impl<T: IntoIterator, E> Outcome<T, E> {
    /// Returns an iterator over the success value's items. Iterating a failure propagates the
    /// held error instead.
    pub fn try_into_iter(self) -> Result<T::IntoIter, E> {
        self.into_result().map(IntoIterator::into_iter)
    }
}

#[cfg(feature = "futures")]
impl<S: Stream, E> Outcome<S, E> {
    /// Returns a stream over the success value's items. A failed Outcome produces a stream with
    /// its error as the only item.
    pub fn into_stream(self) -> impl Stream<Item = Result<S::Item, E>> {
        match self {
            Outcome::Ok(inner) => Either::Left(inner.map(Ok)),
            Outcome::Err(error) => Either::Right(stream::once(future::ready(Err(error)))),
        }
    }
}
