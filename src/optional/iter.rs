#[cfg(feature = "futures")]
use futures::future::{self, Either};
#[cfg(feature = "futures")]
use futures::stream::{self, Stream, StreamExt};

use super::Optional;
use crate::error::EmptyOptional;

impl<T: IntoIterator> Optional<T> {
    /// Returns an iterator over the held value's items. Iterating an empty Optional fails with
    /// [`EmptyOptional`] rather than silently producing nothing.
    pub fn try_into_iter(self) -> Result<T::IntoIter, EmptyOptional> {
        self.try_unwrap().map(IntoIterator::into_iter)
    }
}

#[cfg(feature = "futures")]
impl<S: Stream> Optional<S> {
    /// Returns a stream over the held stream's items. An empty Optional produces a stream with a
    /// single [`EmptyOptional`] error.
    pub fn into_stream(self) -> impl Stream<Item = Result<S::Item, EmptyOptional>> {
        match self {
            Optional::Some(inner) => Either::Left(inner.map(Ok)),
            Optional::None => Either::Right(stream::once(future::ready(Err(
                EmptyOptional::default(),
            )))),
        }
    }
}
