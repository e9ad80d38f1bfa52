// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{SeqfluxError, Step};

/// The immediate pull protocol.
///
/// A producer hands out one element per [`next`](Producer::next) call until
/// it reports [`Step::Complete`]. From then on it is inert: every further call
/// reports completion again.
///
/// Stages built on a producer own it exclusively. When a consumer stops early
/// it calls [`force_return`](Producer::force_return) (or
/// [`force_throw`](Producer::force_throw) when it stops because of a failure),
/// and every stage forwards that call to its upstream before reacting, so the
/// innermost source releases its resources exactly once.
///
/// Only `next` is required. The default forced operations report exhaustion
/// without side effects, which is how a foreign producer that knows nothing
/// about shutdown still composes: the stages above it latch the shutdown and
/// stop pulling from it.
///
/// # Examples
///
/// ```rust
/// use seqflux_core::{Producer, Step};
///
/// struct Countdown(u32);
///
/// impl Producer for Countdown {
///     type Item = u32;
///     type Output = ();
///
///     fn next(&mut self) -> Step<u32> {
///         if self.0 == 0 {
///             return Step::Complete(());
///         }
///         self.0 -= 1;
///         Step::Yielded(self.0 + 1)
///     }
/// }
///
/// let mut countdown = Countdown(2);
/// assert_eq!(countdown.next(), Step::Yielded(2));
/// assert_eq!(countdown.force_return(()), Step::Complete(()));
/// ```
pub trait Producer {
    /// Element type handed out by `next`
    type Item;
    /// Final value carried by exhaustion
    type Output: Default;

    /// Advances by exactly one element, or reports exhaustion.
    fn next(&mut self) -> Step<Self::Item, Self::Output>;

    /// Requests a cooperative early shutdown.
    ///
    /// After this call every `next` reports exhaustion.
    fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        Step::Complete(value)
    }

    /// Propagates an external failure into the producer.
    ///
    /// Producers that cannot react to failures treat this as immediate exhaustion.
    fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        let _ = error;
        Step::done()
    }
}

impl<P> Producer for &mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;
    type Output = P::Output;

    fn next(&mut self) -> Step<Self::Item, Self::Output> {
        (**self).next()
    }

    fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        (**self).force_return(value)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        (**self).force_throw(error)
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;
    type Output = P::Output;

    fn next(&mut self) -> Step<Self::Item, Self::Output> {
        (**self).next()
    }

    fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        (**self).force_return(value)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        (**self).force_throw(error)
    }
}
