// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use seqflux_core::state::Fuse;
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Suspending stage emitting the `Some` payloads of `f`.
#[derive(Clone)]
pub struct FilterMap<P, F> {
    upstream: P,
    f: F,
    fuse: Fuse,
}

impl<P, F> FilterMap<P, F> {
    pub fn new(upstream: P, f: F) -> Self {
        Self {
            upstream,
            f,
            fuse: Fuse::new(),
        }
    }

    async fn settle<Y, U, D, Fut>(&mut self, step: Step<Y, D>) -> Step<U, D>
    where
        F: FnMut(Y) -> Fut,
        Fut: Future<Output = Option<U>>,
        D: Default,
    {
        match step {
            Step::Yielded(item) => match (self.f)(item).await {
                Some(mapped) => Step::Yielded(mapped),
                None => Step::done(),
            },
            Step::Complete(output) => Step::Complete(output),
        }
    }
}

impl<P, F, Fut, U> AsyncProducer for FilterMap<P, F>
where
    P: AsyncProducer,
    F: FnMut(P::Item) -> Fut,
    Fut: Future<Output = Option<U>>,
{
    type Item = U;
    type Output = P::Output;

    async fn next(&mut self) -> Step<U, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        loop {
            match self.upstream.next().await {
                Step::Yielded(item) => {
                    if let Some(mapped) = (self.f)(item).await {
                        return Step::Yielded(mapped);
                    }
                }
                Step::Complete(output) => return Step::Complete(output),
            }
        }
    }

    async fn force_return(&mut self, value: P::Output) -> Step<U, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value).await;
        self.settle(step).await
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<U, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error).await;
        self.settle(step).await
    }
}

pub trait AsyncFilterMapExt: AsyncProducer + Sized {
    /// Awaits `f` on each element and emits the payload of every `Some`.
    fn filter_map<F, Fut, U>(self, f: F) -> FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        FilterMap::new(self, f)
    }
}

impl<P> AsyncFilterMapExt for P where P: AsyncProducer {}
