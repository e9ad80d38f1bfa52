// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::state::Countdown;
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Suspending stage emitting at most `n` elements.
///
/// Once the budget is used up, `next` reports exhaustion without awaiting the
/// upstream. Forced operations are always forwarded.
#[derive(Debug, Clone)]
pub struct Take<P> {
    upstream: P,
    countdown: Countdown,
}

impl<P> Take<P> {
    pub fn new(upstream: P, n: usize) -> Self {
        Self {
            upstream,
            countdown: Countdown::new(n),
        }
    }

    pub const fn remaining(&self) -> usize {
        self.countdown.remaining()
    }

    pub fn into_inner(self) -> P {
        self.upstream
    }
}

impl<P> AsyncProducer for Take<P>
where
    P: AsyncProducer,
{
    type Item = P::Item;
    type Output = P::Output;

    async fn next(&mut self) -> Step<P::Item, P::Output> {
        if self.countdown.is_spent() {
            return Step::done();
        }
        let step = self.upstream.next().await;
        self.countdown.admit(step)
    }

    async fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        let step = self.upstream.force_return(value).await;
        self.countdown.settle(step)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        let step = self.upstream.force_throw(error).await;
        self.countdown.settle(step)
    }
}

pub trait AsyncTakeExt: AsyncProducer + Sized {
    /// Emits only the first `n` elements, then reports exhaustion.
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }
}

impl<P> AsyncTakeExt for P where P: AsyncProducer {}
