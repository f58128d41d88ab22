/// The result of a single step of a [`Producer`](crate::Producer).
///
/// A step either produces the next value or reports that the sequence has
/// ended. There is no sentinel value: an ended step carries nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The step produced the next value of the sequence.
    Produced(T),
    /// The sequence has no more values.
    Ended,
}

impl<T> Outcome<T> {
    /// Returns `true` if the step produced a value.
    #[inline]
    pub const fn is_produced(&self) -> bool {
        matches!(self, Outcome::Produced(_))
    }

    /// Returns `true` if the step ended the sequence.
    #[inline]
    pub const fn is_ended(&self) -> bool {
        matches!(self, Outcome::Ended)
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Produced(value) => Some(value),
            Outcome::Ended => None,
        }
    }

    /// Maps the produced value, leaving `Ended` untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Produced(value) => Outcome::Produced(f(value)),
            Outcome::Ended => Outcome::Ended,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Produced(value),
            None => Outcome::Ended,
        }
    }
}

/// Signals the end of the sequence from inside a producer's step.
///
/// ```rust
/// use lookahead::{end_of_data, Outcome, Producer};
///
/// struct Countdown(u32);
///
/// impl Producer for Countdown {
///     type Item = u32;
///     type Error = std::convert::Infallible;
///
///     fn compute_next(&mut self) -> Result<Outcome<u32>, Self::Error> {
///         if self.0 == 0 {
///             return end_of_data();
///         }
///
///         self.0 -= 1;
///         Ok(Outcome::Produced(self.0))
///     }
/// }
/// ```
#[inline(always)]
pub fn end_of_data<T, E>() -> Result<Outcome<T>, E> {
    Ok(Outcome::Ended)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn option_converts_into_outcome() {
        assert_eq!(Outcome::from(Some(3)), Outcome::Produced(3));
        assert_eq!(Outcome::<u8>::from(None), Outcome::Ended);
    }

    #[test]
    fn map_only_touches_produced_values() {
        assert_eq!(Outcome::Produced(2).map(|n| n * 10), Outcome::Produced(20));
        assert_eq!(Outcome::<i32>::Ended.map(|n| n * 10), Outcome::Ended);
    }

    #[test]
    fn end_of_data_ends() {
        let outcome: Result<Outcome<String>, ()> = end_of_data();

        assert_eq!(outcome, Ok(Outcome::Ended));
        assert!(outcome.unwrap().is_ended());
    }
}
