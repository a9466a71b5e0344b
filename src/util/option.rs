use std::hint;

use crate::Optional;

pub(crate) trait OptionalExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionalExtension<T> for Optional<T> {
    /// Acts similarly to [`Optional::unwrap`] but with [`unreachable!`] in the none branch for dev
    /// and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Used by the in-place mutators, which have just written a value and hand back a reference to
    /// it. No panics annotation is used, the whole semantics are that calling this indicates that
    /// None is impossible.
    unsafe fn unreachable(self) -> T {
        match self {
            Optional::Some(val) => val,
            Optional::None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            Optional::None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
