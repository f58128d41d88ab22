use crate::Outcome;

/// A source of values that can only be asked, once and destructively, for
/// the next one.
///
/// Implementors supply [`compute_next`](Producer::compute_next) and wrap
/// themselves in a [`Cursor`](crate::Cursor) to get the peek/take protocol.
/// A step that returns an error (or panics) is never retried: the cursor
/// that drove it is poisoned.
pub trait Producer {
    type Item;
    type Error;

    /// Computes the next value, or returns [`Outcome::Ended`] (see
    /// [`end_of_data`](crate::end_of_data)) once the sequence is exhausted.
    fn compute_next(&mut self) -> Result<Outcome<Self::Item>, Self::Error>;
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;
    type Error = P::Error;

    #[inline]
    fn compute_next(&mut self) -> Result<Outcome<Self::Item>, Self::Error> {
        (**self).compute_next()
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;
    type Error = P::Error;

    #[inline]
    fn compute_next(&mut self) -> Result<Outcome<Self::Item>, Self::Error> {
        (**self).compute_next()
    }
}
