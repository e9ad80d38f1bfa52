// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use seqflux_core::state::Fuse;
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Suspending stage awaiting `f` on every element.
#[derive(Clone)]
pub struct Map<P, F> {
    upstream: P,
    f: F,
    fuse: Fuse,
}

impl<P, F> Map<P, F> {
    pub fn new(upstream: P, f: F) -> Self {
        Self {
            upstream,
            f,
            fuse: Fuse::new(),
        }
    }

    async fn apply<Y, D, Fut>(&mut self, step: Step<Y, D>) -> Step<Fut::Output, D>
    where
        F: FnMut(Y) -> Fut,
        Fut: Future,
    {
        match step {
            Step::Yielded(item) => Step::Yielded((self.f)(item).await),
            Step::Complete(output) => Step::Complete(output),
        }
    }
}

impl<P, F, Fut> AsyncProducer for Map<P, F>
where
    P: AsyncProducer,
    F: FnMut(P::Item) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;
    type Output = P::Output;

    async fn next(&mut self) -> Step<Fut::Output, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let step = self.upstream.next().await;
        self.apply(step).await
    }

    async fn force_return(&mut self, value: P::Output) -> Step<Fut::Output, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value).await;
        self.apply(step).await
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Fut::Output, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error).await;
        self.apply(step).await
    }
}

pub trait AsyncMapExt: AsyncProducer + Sized {
    /// Transforms each element with the future returned by `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_stream::prelude::*;
    ///
    /// # futures::executor::block_on(async {
    /// let lengths: Vec<usize> = from_iter(["one", "three"])
    ///     .map(|s| async move { s.len() })
    ///     .collect()
    ///     .await;
    /// assert_eq!(lengths, vec![3, 5]);
    /// # });
    /// ```
    fn map<F, Fut>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future,
    {
        Map::new(self, f)
    }
}

impl<P> AsyncMapExt for P where P: AsyncProducer {}
