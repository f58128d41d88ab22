use thiserror::Error;

/// Result alias for cursor operations over a producer failing with `E`.
pub type Result<T, E> = std::result::Result<T, Error<E>>;

/// Errors reported by a [`Cursor`](crate::Cursor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The cursor was poisoned by an earlier producer failure, or found its
    /// own state inconsistent. It must not be used again.
    #[error("cursor is in an illegal state")]
    IllegalState,

    /// There is no value to take.
    #[error("no more elements")]
    NoMoreElements,

    /// Removal is not supported by cursors.
    #[error("removal is not supported")]
    Unsupported,

    /// The producer's step failed. The cursor is poisoned.
    #[error("producer failed")]
    Producer(#[source] E),
}

impl<E> Error<E> {
    pub fn is_producer(&self) -> bool {
        matches!(self, Error::Producer(_))
    }

    /// Returns the producer's own error, if this is one.
    pub fn into_producer(self) -> Option<E> {
        match self {
            Error::Producer(err) => Some(err),
            _ => None,
        }
    }
}
