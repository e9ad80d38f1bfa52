// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Suspending filter with **discard-when-true** semantics.
//!
//! Same contract as the immediate [`filter`](seqflux_iter::filter): elements
//! for which the predicate resolves to `true` are dropped. The predicate
//! returns a future, so it receives the element by reference and must not
//! hold on to it; compute what is needed before the `async` block.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_stream::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let odd: Vec<i32> = from_iter(vec![1, 2, 3, 4])
//!     .filter(|x| {
//!         let even = x % 2 == 0;
//!         async move { even }
//!     })
//!     .collect()
//!     .await;
//! assert_eq!(odd, vec![1, 3]);
//! # });
//! ```

use core::future::Future;
use seqflux_core::state::Fuse;
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Suspending stage dropping the elements its predicate matches.
#[derive(Clone)]
pub struct Filter<P, F> {
    upstream: P,
    discard: F,
    fuse: Fuse,
}

impl<P, F> Filter<P, F> {
    pub fn new(upstream: P, discard: F) -> Self {
        Self {
            upstream,
            discard,
            fuse: Fuse::new(),
        }
    }

    async fn settle<Y, D, Fut>(&mut self, step: Step<Y, D>) -> Step<Y, D>
    where
        F: FnMut(&Y) -> Fut,
        Fut: Future<Output = bool>,
        D: Default,
    {
        match step {
            Step::Yielded(item) => {
                if (self.discard)(&item).await {
                    Step::done()
                } else {
                    Step::Yielded(item)
                }
            }
            other => other,
        }
    }
}

impl<P, F, Fut> AsyncProducer for Filter<P, F>
where
    P: AsyncProducer,
    F: FnMut(&P::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    type Item = P::Item;
    type Output = P::Output;

    async fn next(&mut self) -> Step<P::Item, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        loop {
            match self.upstream.next().await {
                Step::Yielded(item) => {
                    if !(self.discard)(&item).await {
                        return Step::Yielded(item);
                    }
                }
                exhausted => return exhausted,
            }
        }
    }

    async fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value).await;
        self.settle(step).await
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error).await;
        self.settle(step).await
    }
}

pub trait AsyncFilterExt: AsyncProducer + Sized {
    /// Drops every element for which `discard` resolves to `true`.
    fn filter<F, Fut>(self, discard: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        Filter::new(self, discard)
    }
}

impl<P> AsyncFilterExt for P where P: AsyncProducer {}
