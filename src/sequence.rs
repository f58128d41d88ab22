use std::convert::Infallible;
use std::fmt;

use crate::{Cursor, Outcome, Producer};

/// An index-driven producer. The closure is called with `1, 2, 3, …` and
/// the sequence ends the first time it returns `None`.
pub struct Sequence<T> {
    counter: usize,
    produce: Box<dyn FnMut(usize) -> Option<T>>,
}

impl<T> Sequence<T> {
    pub fn new(produce: impl FnMut(usize) -> Option<T> + 'static) -> Self {
        Self {
            counter: 1,
            produce: Box::new(produce),
        }
    }

    /// Wraps the sequence in a [`Cursor`].
    pub fn cursor(self) -> Cursor<Self> {
        Cursor::new(self)
    }
}

impl<T> Producer for Sequence<T> {
    type Item = T;
    type Error = Infallible;

    fn compute_next(&mut self) -> Result<Outcome<T>, Infallible> {
        let n = self.counter;
        self.counter += 1;

        Ok((self.produce)(n).into())
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

/// A producer backed by a step closure. See [`from_fn`].
pub struct FromFn<F>(F);

impl<T, E, F> Producer for FromFn<F>
where
    F: FnMut() -> Result<Outcome<T>, E>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn compute_next(&mut self) -> Result<Outcome<T>, E> {
        (self.0)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a [`Cursor`] whose step is the given closure.
///
/// ```rust
/// use lookahead::{from_fn, Outcome};
///
/// let mut words = "to be or not".split(' ');
/// let mut cursor = from_fn(move || Ok::<_, ()>(Outcome::from(words.next())));
///
/// assert_eq!(cursor.peek(), Ok(Some(&"to")));
/// let mut taken = Vec::new();
/// assert_eq!(cursor.take_many(3, &mut taken), Ok(3));
/// assert_eq!(taken, vec!["to", "be", "or"]);
/// ```
pub fn from_fn<T, E, F>(step: F) -> Cursor<FromFn<F>>
where
    F: FnMut() -> Result<Outcome<T>, E>,
{
    Cursor::new(FromFn(step))
}
