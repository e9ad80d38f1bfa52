// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::probe::{Probe, ProbedSource};
use seqflux_core::{AsyncProducer, Producer, SeqfluxError, Step};

/// Suspending view of an immediate producer.
///
/// Every protocol call first yields to the scheduler, so each pull of a
/// downstream stage crosses a real suspension point.
#[derive(Debug)]
pub struct Yielding<P> {
    inner: P,
}

impl<P> Yielding<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

/// Suspending [`ProbedSource`].
pub type AsyncProbedSource<T> = Yielding<ProbedSource<T>>;

impl<T> AsyncProbedSource<T> {
    /// Suspending source over `items`, recording into `probe`.
    pub fn probed(items: impl IntoIterator<Item = T>, probe: &Probe) -> Self {
        Self::new(ProbedSource::new(items, probe))
    }
}

impl<P> AsyncProducer for Yielding<P>
where
    P: Producer,
{
    type Item = P::Item;
    type Output = P::Output;

    async fn next(&mut self) -> Step<P::Item, P::Output> {
        tokio::task::yield_now().await;
        self.inner.next()
    }

    async fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        tokio::task::yield_now().await;
        self.inner.force_return(value)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        tokio::task::yield_now().await;
        self.inner.force_throw(error)
    }
}
