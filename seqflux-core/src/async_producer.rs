// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{SeqfluxError, Step};

/// The suspension-capable pull protocol.
///
/// Same contract as [`Producer`](crate::Producer), except that each call may
/// suspend. Futures returned by these methods are not required to be `Send`:
/// a chain runs on a single-threaded cooperative scheduler, and every stage
/// awaits its one upstream call before doing anything else, so a chain never
/// has more than one call in flight.
///
/// There is no preemptive cancellation. A consumer that wants to stop early
/// awaits [`force_return`](AsyncProducer::force_return) or
/// [`force_throw`](AsyncProducer::force_throw).
#[allow(async_fn_in_trait)]
pub trait AsyncProducer {
    /// Element type handed out by `next`
    type Item;
    /// Final value carried by exhaustion
    type Output: Default;

    /// Advances by exactly one element, or reports exhaustion.
    async fn next(&mut self) -> Step<Self::Item, Self::Output>;

    /// Requests a cooperative early shutdown.
    async fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        Step::Complete(value)
    }

    /// Propagates an external failure into the producer.
    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        let _ = error;
        Step::done()
    }
}

impl<P> AsyncProducer for &mut P
where
    P: AsyncProducer,
{
    type Item = P::Item;
    type Output = P::Output;

    async fn next(&mut self) -> Step<Self::Item, Self::Output> {
        (**self).next().await
    }

    async fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        (**self).force_return(value).await
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        (**self).force_throw(error).await
    }
}

impl<P> AsyncProducer for Box<P>
where
    P: AsyncProducer,
{
    type Item = P::Item;
    type Output = P::Output;

    async fn next(&mut self) -> Step<Self::Item, Self::Output> {
        (**self).next().await
    }

    async fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        (**self).force_return(value).await
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        (**self).force_throw(error).await
    }
}
