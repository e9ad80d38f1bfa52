// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::state::Fuse;
use seqflux_core::{Producer, SeqfluxError, Step};

/// Stage mapping elements to `Option` and emitting the `Some` payloads.
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

    fn settle<Y, U, D: Default>(&mut self, step: Step<Y, D>) -> Step<U, D>
    where
        F: FnMut(Y) -> Option<U>,
    {
        match step {
            Step::Yielded(item) => match (self.f)(item) {
                Some(mapped) => Step::Yielded(mapped),
                None => Step::done(),
            },
            Step::Complete(output) => Step::Complete(output),
        }
    }
}

impl<P, F, U> Producer for FilterMap<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> Option<U>,
{
    type Item = U;
    type Output = P::Output;

    fn next(&mut self) -> Step<U, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        loop {
            match self.upstream.next() {
                Step::Yielded(item) => {
                    if let Some(mapped) = (self.f)(item) {
                        return Step::Yielded(mapped);
                    }
                }
                Step::Complete(output) => return Step::Complete(output),
            }
        }
    }

    fn force_return(&mut self, value: P::Output) -> Step<U, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value);
        self.settle(step)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<U, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error);
        self.settle(step)
    }
}

/// Extension trait providing the `filter_map` operator.
pub trait FilterMapExt: Producer + Sized {
    /// Applies `f` and emits the payload of every `Some`, skipping `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_iter::prelude::*;
    ///
    /// let parsed: Vec<u8> = vec!["1", "x", "3"]
    ///     .into_producer()
    ///     .filter_map(|s| s.parse().ok())
    ///     .collect();
    /// assert_eq!(parsed, vec![1, 3]);
    /// ```
    fn filter_map<F, U>(self, f: F) -> FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, f)
    }
}

impl<P> FilterMapExt for P where P: Producer {}
