use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace};

use crate::{Error, Outcome, Producer, Result};

/// Internal lifecycle of a [`Cursor`]. The pending value only exists in
/// `Ready`.
enum State<T> {
    NotReady,
    Ready(T),
    Done,
    Failed,
}

/// A snapshot of where a [`Cursor`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// No value has been computed since the last take.
    NotReady,
    /// A value has been computed and is waiting to be taken.
    Ready,
    /// The producer reported the end of the sequence.
    Done,
    /// The producer failed; the cursor can no longer be used.
    Failed,
}

/// Drives a [`Producer`] one step at a time, caching at most one value
/// ahead.
///
/// [`has_more`](Cursor::has_more) may be called any number of times and
/// invokes the producer at most once per value. [`take_next`](Cursor::take_next)
/// hands the cached value over to the caller.
///
/// If the producer fails (by returning an error or by panicking), the cursor
/// is poisoned: the failure is reported once and every later call returns
/// [`Error::IllegalState`].
///
/// All operations take `&mut self`; sharing a cursor between threads needs
/// external synchronization.
pub struct Cursor<P: Producer> {
    state: State<P::Item>,
    producer: P,
}

impl<P: Producer> Cursor<P> {
    pub fn new(producer: P) -> Self {
        Self {
            state: State::NotReady,
            producer,
        }
    }

    /// Returns whether there is a next value, computing it if needed.
    pub fn has_more(&mut self) -> Result<bool, P::Error> {
        match self.state {
            State::Failed => Err(Error::IllegalState),
            State::Done => Ok(false),
            State::Ready(_) => Ok(true),
            State::NotReady => self.try_to_compute_next(),
        }
    }

    fn try_to_compute_next(&mut self) -> Result<bool, P::Error> {
        // Stays failed if the step errors or unwinds.
        trace!("cursor marked failed while the producer steps");
        self.state = State::Failed;

        match self.producer.compute_next() {
            Ok(Outcome::Produced(value)) => {
                trace!("cursor ready");
                self.state = State::Ready(value);

                Ok(true)
            }
            Ok(Outcome::Ended) => {
                trace!("cursor done");
                debug!("cursor reached the end of the sequence");
                self.state = State::Done;

                Ok(false)
            }
            Err(err) => {
                trace!("cursor stays failed");
                debug!("producer failed, poisoning cursor");

                Err(Error::Producer(err))
            }
        }
    }

    /// Returns a reference to the next value without consuming it.
    pub fn peek(&mut self) -> Result<Option<&P::Item>, P::Error> {
        if !self.has_more()? {
            return Ok(None);
        }

        match &self.state {
            State::Ready(value) => Ok(Some(value)),
            _ => Err(Error::IllegalState),
        }
    }

    /// Takes the next value, computing it first if it isn't cached yet.
    pub fn take_next(&mut self) -> Result<P::Item, P::Error> {
        if !self.has_more()? {
            return Err(Error::NoMoreElements);
        }

        match mem::replace(&mut self.state, State::NotReady) {
            State::Ready(value) => {
                trace!("cursor handed over its value, not ready");

                Ok(value)
            }
            other => {
                self.state = other;

                Err(Error::IllegalState)
            }
        }
    }

    /// Takes up to *n* values, appending them to `values`, and returns how
    /// many were taken. Stops early at the end of the sequence.
    ///
    /// On error, every value taken before the failure is already in
    /// `values`.
    pub fn take_many(
        &mut self,
        n: usize,
        values: &mut Vec<P::Item>,
    ) -> Result<usize, P::Error> {
        let mut taken = 0;

        while taken < n && self.has_more()? {
            values.push(self.take_next()?);
            taken += 1;
        }

        Ok(taken)
    }

    /// Cursors are read-only; this always fails with [`Error::Unsupported`]
    /// and leaves the cursor untouched.
    pub fn remove(&mut self) -> Result<(), P::Error> {
        Err(Error::Unsupported)
    }

    pub fn state(&self) -> CursorState {
        match self.state {
            State::NotReady => CursorState::NotReady,
            State::Ready(_) => CursorState::Ready,
            State::Done => CursorState::Done,
            State::Failed => CursorState::Failed,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state() == CursorState::Done
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        self.state() == CursorState::Failed
    }

    pub fn get_ref(&self) -> &P {
        &self.producer
    }

    /// Gives the producer back, dropping any value that was cached.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P> fmt::Debug for Cursor<P>
where
    P: Producer + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Cursor");

        match &self.state {
            State::Ready(value) => s
                .field("state", &CursorState::Ready)
                .field("pending", value),
            _ => s.field("state", &self.state()),
        };

        s.field("producer", &self.producer).finish()
    }
}

/// Yields each value as `Ok`, ends at the end of the sequence, and reports a
/// producer failure once as `Err`. A poisoned cursor yields nothing further.
impl<P: Producer> Iterator for Cursor<P> {
    type Item = Result<P::Item, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.take_next() {
            Ok(value) => Some(Ok(value)),
            Err(Error::NoMoreElements | Error::IllegalState) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<P: Producer> FusedIterator for Cursor<P> {}
