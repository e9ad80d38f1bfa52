// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::state::{Fuse, Tally};
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Suspending stage pairing elements with a running index.
#[derive(Debug, Clone)]
pub struct Enumerate<P> {
    upstream: P,
    tally: Tally,
    fuse: Fuse,
}

impl<P> Enumerate<P> {
    pub fn new(upstream: P, start: usize) -> Self {
        Self {
            upstream,
            tally: Tally::starting_at(start),
            fuse: Fuse::new(),
        }
    }

    /// Index the next produced element will get.
    pub const fn next_index(&self) -> usize {
        self.tally.peek()
    }
}

impl<P> AsyncProducer for Enumerate<P>
where
    P: AsyncProducer,
{
    type Item = (usize, P::Item);
    type Output = P::Output;

    async fn next(&mut self) -> Step<Self::Item, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let step = self.upstream.next().await;
        self.tally.tag(step)
    }

    async fn force_return(&mut self, value: P::Output) -> Step<Self::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value).await;
        self.tally.tag(step)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error).await;
        self.tally.tag(step)
    }
}

pub trait AsyncEnumerateExt: AsyncProducer + Sized {
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self, 0)
    }

    fn enumerate_from(self, start: usize) -> Enumerate<Self> {
        Enumerate::new(self, start)
    }
}

impl<P> AsyncEnumerateExt for P where P: AsyncProducer {}
