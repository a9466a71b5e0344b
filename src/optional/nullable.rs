use super::Optional;

/// A type with its own notion of an empty value (the empty sentinel).
///
/// Whenever a Nullable passes through one of [`Optional`]'s nullable entry points, the sentinel
/// collapses to [`Optional::None`] instead of being stored as a value.
pub trait Nullable: Sized {
    /// The type left over once the sentinel has been ruled out.
    type Inner;

    /// Returns true if this value is the empty sentinel.
    fn is_sentinel(&self) -> bool;

    /// Converts this value into an Optional, mapping the sentinel to `None`.
    fn into_optional(self) -> Optional<Self::Inner>;
}

impl<T> Nullable for Option<T> {
    type Inner = T;

    fn is_sentinel(&self) -> bool {
        self.is_none()
    }

    fn into_optional(self) -> Optional<T> {
        match self {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> Nullable for Optional<T> {
    type Inner = T;

    fn is_sentinel(&self) -> bool {
        self.is_none()
    }

    fn into_optional(self) -> Optional<T> {
        self
    }
}
